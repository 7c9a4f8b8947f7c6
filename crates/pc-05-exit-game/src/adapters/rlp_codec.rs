//! RLP transaction codec.
//!
//! ```text
//! [input1, input2, token, owner1, amount1, owner2, amount2]
//! ```
//!
//! Positions and the token are integers, owners are 20-byte strings and
//! amounts are minimal big-endian integers of at most 32 bytes. Trailing bytes after
//! the list are rejected.

use crate::domain::{CodecError, PlasmaTransaction, TransactionOutput};
use crate::ports::outbound::TransactionCodec;
use rlp::{DecoderError, Rlp, RlpStream};
use shared_types::{Address, Amount, UtxoPosition};

const FIELD_COUNT: usize = 7;

/// Codec for the fixed seven-field transaction list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RlpTransactionCodec;

impl RlpTransactionCodec {
    /// Create a codec.
    pub fn new() -> Self {
        Self
    }
}

impl TransactionCodec for RlpTransactionCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PlasmaTransaction, CodecError> {
        let rlp = Rlp::new(bytes);
        if !rlp.is_list() {
            return Err(CodecError::InvalidStructure(
                "transaction must be an RLP list".to_string(),
            ));
        }

        let total = rlp
            .payload_info()
            .map_err(|e| rlp_error("header", e))?
            .total();
        if total > bytes.len() {
            return Err(CodecError::InvalidStructure(format!(
                "truncated: header claims {} bytes, got {}",
                total,
                bytes.len()
            )));
        }
        if total < bytes.len() {
            return Err(CodecError::TrailingBytes(bytes.len() - total));
        }

        let count = rlp.item_count().map_err(|e| rlp_error("list", e))?;
        if count != FIELD_COUNT {
            return Err(CodecError::InvalidStructure(format!(
                "expected {} fields, got {}",
                FIELD_COUNT, count
            )));
        }

        Ok(PlasmaTransaction {
            inputs: [
                UtxoPosition(decode_u64(&rlp, 0, "input1")?),
                UtxoPosition(decode_u64(&rlp, 1, "input2")?),
            ],
            token: decode_u64(&rlp, 2, "token")?,
            outputs: [
                TransactionOutput::new(
                    decode_address(&rlp, 3, "owner1")?,
                    decode_u256(&rlp, 4, "amount1")?,
                ),
                TransactionOutput::new(
                    decode_address(&rlp, 5, "owner2")?,
                    decode_u256(&rlp, 6, "amount2")?,
                ),
            ],
        })
    }

    fn encode(&self, tx: &PlasmaTransaction) -> Vec<u8> {
        let mut stream = RlpStream::new_list(FIELD_COUNT);
        stream.append(&tx.inputs[0].as_u64());
        stream.append(&tx.inputs[1].as_u64());
        stream.append(&tx.token);
        for output in &tx.outputs {
            stream.append(&output.owner.to_vec());
            stream.append(&output.amount);
        }
        stream.out().to_vec()
    }
}

fn decode_u64(rlp: &Rlp, index: usize, field: &'static str) -> Result<u64, CodecError> {
    rlp.at(index)
        .and_then(|r| r.as_val())
        .map_err(|e| rlp_error(field, e))
}

fn decode_bytes(rlp: &Rlp, index: usize, field: &'static str) -> Result<Vec<u8>, CodecError> {
    rlp.at(index)
        .and_then(|r| r.as_val::<Vec<u8>>())
        .map_err(|e| rlp_error(field, e))
}

fn decode_address(rlp: &Rlp, index: usize, field: &'static str) -> Result<Address, CodecError> {
    let bytes = decode_bytes(rlp, index, field)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| CodecError::InvalidField {
        field,
        reason: format!("address must be 20 bytes, got {}", len),
    })
}

fn decode_u256(rlp: &Rlp, index: usize, field: &'static str) -> Result<Amount, CodecError> {
    let bytes = decode_bytes(rlp, index, field)?;
    if bytes.len() > 32 {
        return Err(CodecError::InvalidField {
            field,
            reason: format!("too large: {} bytes", bytes.len()),
        });
    }
    if bytes.first() == Some(&0) {
        return Err(CodecError::InvalidField {
            field,
            reason: "leading zero byte in integer".to_string(),
        });
    }

    let mut arr = [0u8; 32];
    arr[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(Amount::from_big_endian(&arr))
}

fn rlp_error(field: &'static str, e: DecoderError) -> CodecError {
    CodecError::InvalidField {
        field,
        reason: format!("{:?}", e),
    }
}
