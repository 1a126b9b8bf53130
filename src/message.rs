//! DNS message representation.
//!
//! A message is the unit of exchange: a 12-byte header followed by four
//! ordered sections (questions, answers, authorities, additionals). This
//! module holds the top-level codec entry points: [`Message::decode`]
//! over caller-supplied bytes and [`Message::encode`] into a
//! caller-supplied buffer.

use crate::error::{Error, Result};
use crate::header::Header;
use crate::question::Question;
use crate::record::ResourceRecord;
use crate::wire::{WireReader, WireWriter};
use crate::MAX_MSG_LEN;
use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete DNS message.
///
/// The header's section counts are authoritative on the wire but derived
/// from the section lengths on encode; the `add_*` mutators keep them in
/// sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Message {
    /// The message header.
    header: Header,
    /// The question section.
    questions: Vec<Question>,
    /// The answer section.
    answers: Vec<ResourceRecord>,
    /// The authority section.
    authorities: Vec<ResourceRecord>,
    /// The additional section.
    additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Creates an empty message with the given header.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Creates a query message with a random ID and recursion requested.
    pub fn query(question: Question) -> Self {
        Self {
            header: Header::query(),
            questions: vec![question],
            ..Self::default()
        }
    }

    /// Creates a response message mirroring a query's ID, opcode and
    /// questions.
    pub fn response_from(query: &Message) -> Self {
        let mut header = Header::response_from(&query.header);
        header.qd_count = query.questions.len() as u16;

        Self {
            header,
            questions: query.questions.clone(),
            ..Self::default()
        }
    }

    /// Returns the message header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    #[inline]
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the message ID.
    #[inline]
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Sets the message ID.
    #[inline]
    pub fn set_id(&mut self, id: u16) {
        self.header.id = id;
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        self.header.is_query()
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.header.is_response()
    }

    /// Returns the question section.
    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question, if any.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section.
    #[inline]
    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    /// Returns the authority section.
    #[inline]
    pub fn authorities(&self) -> &[ResourceRecord] {
        &self.authorities
    }

    /// Returns the additional section.
    #[inline]
    pub fn additionals(&self) -> &[ResourceRecord] {
        &self.additionals
    }

    /// Adds a question and updates the header count.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        self.header.qd_count = self.questions.len() as u16;
    }

    /// Adds an answer record and updates the header count.
    pub fn add_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
        self.header.an_count = self.answers.len() as u16;
    }

    /// Adds an authority record and updates the header count.
    pub fn add_authority(&mut self, record: ResourceRecord) {
        self.authorities.push(record);
        self.header.ns_count = self.authorities.len() as u16;
    }

    /// Adds an additional record and updates the header count.
    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.additionals.push(record);
        self.header.ar_count = self.additionals.len() as u16;
    }

    /// Decodes a message from wire bytes.
    ///
    /// Inputs longer than [`MAX_MSG_LEN`] are refused outright. Decoding
    /// succeeds iff the buffer never poisons and the cursor lands exactly
    /// on the end of the input; trailing bytes are a framing error. On
    /// failure the partially-populated message is discarded.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() > MAX_MSG_LEN {
            return Err(Error::MessageTooLong);
        }

        let mut reader = WireReader::new(data);
        let header = Header::decode(&mut reader);

        let mut questions = Vec::new();
        for _ in 0..header.qd_count {
            if !reader.is_ok() {
                break;
            }
            questions.push(Question::decode(&mut reader));
        }

        let answers = Self::decode_records(&mut reader, header.an_count);
        let authorities = Self::decode_records(&mut reader, header.ns_count);
        let additionals = Self::decode_records(&mut reader, header.ar_count);

        if let Some(err) = reader.status() {
            return Err(err);
        }
        if reader.position() != data.len() {
            return Err(Error::InvalidData);
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn decode_records(reader: &mut WireReader<'_>, count: u16) -> Vec<ResourceRecord> {
        let mut records = Vec::new();
        for _ in 0..count {
            if !reader.is_ok() {
                break;
            }
            records.push(ResourceRecord::decode(reader));
        }
        records
    }

    /// Encodes the message into the caller's buffer, returning the
    /// number of bytes written.
    ///
    /// The header counts are recomputed from the section lengths. On
    /// failure (typically [`Error::BufferOverflow`] when the buffer is
    /// too small) the partial output is unusable.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize> {
        let mut writer = WireWriter::new(out);

        let mut header = self.header.clone();
        header.qd_count = self.questions.len() as u16;
        header.an_count = self.answers.len() as u16;
        header.ns_count = self.authorities.len() as u16;
        header.ar_count = self.additionals.len() as u16;
        header.encode(&mut writer);

        for q in &self.questions {
            q.encode(&mut writer);
        }
        for r in &self.answers {
            r.encode(&mut writer);
        }
        for r in &self.authorities {
            r.encode(&mut writer);
        }
        for r in &self.additionals {
            r.encode(&mut writer);
        }

        writer.finish()
    }

    /// Encodes the message into a freshly-allocated buffer of
    /// [`MAX_MSG_LEN`] capacity.
    pub fn to_wire(&self) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(MAX_MSG_LEN);
        let len = self.encode(&mut buf)?;
        buf.truncate(len);
        Ok(buf.freeze())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; ->>HEADER<<- {}", self.header)?;

        if !self.questions.is_empty() {
            writeln!(f, ";; QUESTION SECTION:")?;
            for q in &self.questions {
                writeln!(f, ";{q}")?;
            }
        }

        if !self.answers.is_empty() {
            writeln!(f, ";; ANSWER SECTION:")?;
            for r in &self.answers {
                writeln!(f, "{r}")?;
            }
        }

        if !self.authorities.is_empty() {
            writeln!(f, ";; AUTHORITY SECTION:")?;
            for r in &self.authorities {
                writeln!(f, "{r}")?;
            }
        }

        if !self.additionals.is_empty() {
            writeln!(f, ";; ADDITIONAL SECTION:")?;
            for r in &self.additionals {
                writeln!(f, "{r}")?;
            }
        }

        Ok(())
    }
}
