//! Mapping between `ProbeRecordType` and `hickory_proto::rr::RecordType`.

use ferrous_sidecar_domain::ProbeRecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &ProbeRecordType) -> HickoryRecordType {
        match record_type {
            ProbeRecordType::A => HickoryRecordType::A,
            ProbeRecordType::AAAA => HickoryRecordType::AAAA,
            ProbeRecordType::ANY => HickoryRecordType::ANY,
            ProbeRecordType::SRV => HickoryRecordType::SRV,
        }
    }

    /// Returns `None` for types a probe cannot ask for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<ProbeRecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(ProbeRecordType::A),
            HickoryRecordType::AAAA => Some(ProbeRecordType::AAAA),
            HickoryRecordType::ANY => Some(ProbeRecordType::ANY),
            HickoryRecordType::SRV => Some(ProbeRecordType::SRV),
            _ => None,
        }
    }
}
