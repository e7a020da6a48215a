use super::*;

/// An untagged event of contract ownership moving to a new address.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    /// The address giving up contract ownership.
    pub previous_owner: Address,
    /// The address receiving contract ownership.
    pub new_owner: Address,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Moving contract ownership to a new address
    OwnershipTransferred(OwnershipTransferredEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::OwnershipTransferred(event) => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            OWNERSHIP_TRANSFERRED_TAG => {
                OwnershipTransferredEvent::deserial(source).map(CustomEvent::OwnershipTransferred)
            }
            _ => Err(ParseError::default()),
        }
    }
}
