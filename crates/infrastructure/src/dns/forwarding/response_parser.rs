use ferrous_sidecar_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    /// `(owner name, first character-string)` for every TXT answer.
    pub fn txt_answers(&self) -> Vec<(String, String)> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => {
                    let text = txt
                        .txt_data()
                        .first()
                        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                        .unwrap_or_default();
                    Some((record.name().to_ascii(), text))
                }
                _ => None,
            })
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedMessage(format!("failed to parse DNS response: {}", e))
        })?;

        let response = DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers: message.answers().to_vec(),
        };

        debug!(
            rcode = ?response.rcode,
            answers = response.answers.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    /// Parses `bytes` and checks that they answer the query with `expected_id`.
    pub fn parse_reply(
        response_bytes: &[u8],
        expected_id: u16,
    ) -> Result<DnsResponse, DomainError> {
        let response = Self::parse(response_bytes)?;
        if response.id != expected_id {
            return Err(DomainError::MalformedMessage(format!(
                "response ID mismatch: expected {}, got {}",
                expected_id, response.id
            )));
        }
        Ok(response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
