//! Byte source to [`Message`]

use ncpdp_models::Message;
use std::io::Read;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::decode::parse_message;
use crate::error::{CodecError, DecodeError, Result};
use crate::interchange;
use crate::transport::unwrap_payload;

/// One decode attempt over one byte source.
///
/// The first call to [`Decoder::decode`] reads the source and caches the
/// outcome; later calls replay it without touching the source again.
pub struct Decoder<R> {
    source: Option<R>,
    config: DecoderConfig,
    outcome: Option<Result<Message>>,
}

impl<R: Read> Decoder<R> {
    pub fn new(source: R) -> Self {
        Self::with_config(source, DecoderConfig::default())
    }

    pub fn with_config(source: R, config: DecoderConfig) -> Self {
        Self {
            source: Some(source),
            config,
            outcome: None,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode(&mut self) -> Result<&Message> {
        let source = &mut self.source;
        let config = &self.config;
        let outcome = self
            .outcome
            .get_or_insert_with(|| read_and_decode(source.take(), config));

        match outcome {
            Ok(message) => Ok(message),
            Err(err) => Err(err.clone()),
        }
    }

    /// Decode and render the interchange JSON.
    pub fn to_json(&mut self) -> std::result::Result<Vec<u8>, CodecError> {
        let message = self.decode()?;
        Ok(interchange::to_json(message)?)
    }

    /// Consume the decoder, returning the owned message.
    pub fn into_message(mut self) -> Result<Message> {
        match self.outcome.take() {
            Some(outcome) => outcome,
            None => read_and_decode(self.source.take(), &self.config),
        }
    }
}

fn read_and_decode<R: Read>(source: Option<R>, config: &DecoderConfig) -> Result<Message> {
    let source = source.ok_or_else(|| DecodeError::Io("message source already consumed".into()))?;
    let raw = read_limited(source, config.max_input_bytes)?;
    decode_message_with(&raw, config)
}

fn read_limited<R: Read>(source: R, limit: Option<usize>) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    match limit {
        Some(limit) => {
            source.take((limit as u64).saturating_add(1)).read_to_end(&mut raw)?;
            if raw.len() > limit {
                return Err(DecodeError::InputTooLarge { limit });
            }
        }
        None => {
            let mut source = source;
            source.read_to_end(&mut raw)?;
        }
    }
    Ok(raw)
}

/// Decode a complete SCRIPT payload held in memory.
pub fn decode_message(raw: &[u8]) -> Result<Message> {
    decode_message_with(raw, &DecoderConfig::default())
}

pub fn decode_message_with(raw: &[u8], config: &DecoderConfig) -> Result<Message> {
    if let Some(limit) = config.max_input_bytes {
        if raw.len() > limit {
            return Err(DecodeError::InputTooLarge { limit });
        }
    }

    debug!(bytes = raw.len(), transport = ?config.transport, "Decoding SCRIPT message");
    let text = unwrap_payload(raw, config.transport)?;
    let message = parse_message(&text)?;
    debug!(
        transaction = %message.transaction_kind(),
        message_id = %message.header.message_id,
        "Decoded SCRIPT message"
    );
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "queue closed"))
        }
    }

    /// Counts reads so tests can prove the source is only consumed once.
    struct CountingReader {
        inner: Cursor<Vec<u8>>,
        reads: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Read for CountingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads.set(self.reads.get() + 1);
            self.inner.read(buf)
        }
    }

    #[test]
    fn empty_source_is_empty_input() {
        let mut decoder = Decoder::new(Cursor::new(Vec::new()));
        assert_eq!(decoder.decode().unwrap_err(), DecodeError::EmptyInput);
    }

    #[test]
    fn failure_is_memoized() {
        let reads = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut decoder = Decoder::new(CountingReader {
            inner: Cursor::new(b"   ".to_vec()),
            reads: reads.clone(),
        });

        let first = decoder.decode().unwrap_err();
        let after_first = reads.get();
        let second = decoder.decode().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(reads.get(), after_first);
    }

    #[test]
    fn io_failure_surfaces_as_io() {
        let mut decoder = Decoder::new(FailingReader);
        assert!(matches!(decoder.decode(), Err(DecodeError::Io(msg)) if msg.contains("queue closed")));
    }

    #[test]
    fn size_limit_is_enforced_before_parsing() {
        let config = DecoderConfig::default().with_max_input_bytes(4);
        let mut decoder = Decoder::with_config(Cursor::new(b"<Message/>".to_vec()), config.clone());
        assert_eq!(
            decoder.decode().unwrap_err(),
            DecodeError::InputTooLarge { limit: 4 }
        );
        assert_eq!(
            decode_message_with(b"<Message/>", &config),
            Err(DecodeError::InputTooLarge { limit: 4 })
        );
    }

    #[test]
    fn largest_size_limit_reads_whole_source() {
        let config = DecoderConfig::default().with_max_input_bytes(usize::MAX);
        let mut decoder = Decoder::with_config(Cursor::new(b"  ".to_vec()), config);
        assert_eq!(decoder.decode().unwrap_err(), DecodeError::EmptyInput);
    }

    #[test]
    fn base64_of_plain_text_is_empty_input() {
        // "hello": decodes fine but carries no markup
        assert_eq!(decode_message(b"aGVsbG8="), Err(DecodeError::EmptyInput));
    }
}
