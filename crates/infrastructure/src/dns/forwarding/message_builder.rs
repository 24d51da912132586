//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_sidecar_domain::{DomainError, ProbeRecordType, ResolverMetric};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a recursive IN-class query with a random ID.
    ///
    /// Returns the ID alongside the wire bytes for response matching.
    pub fn build_query(
        domain: &str,
        record_type: &ProbeRecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let query = Self::question(
            domain,
            RecordTypeMapper::to_hickory(record_type),
            DNSClass::IN,
        )?;

        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Ok((id, Self::serialize_message(&message)?))
    }

    /// Builds the dnsmasq statistics query: one CHAOS TXT question per
    /// [`ResolverMetric`], all in a single message.
    pub fn build_stats_query() -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        for metric in ResolverMetric::ALL {
            message.add_query(Self::question(
                metric.query_name(),
                RecordType::TXT,
                DNSClass::CH,
            )?);
        }

        Ok((id, Self::serialize_message(&message)?))
    }

    fn question(
        domain: &str,
        record_type: RecordType,
        class: DNSClass,
    ) -> Result<Query, DomainError> {
        let name = Name::from_str(domain).map_err(|e| DomainError::InvalidDomainName {
            name: domain.to_string(),
            reason: e.to_string(),
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(class);
        Ok(query)
    }

    pub(crate) fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::MalformedMessage(format!("failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
