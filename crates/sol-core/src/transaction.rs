//! Legacy transaction wire format, built by hand.
//!
//! Only legacy (non-versioned) messages are ever produced here, so the
//! whole envelope stays small: a compact-u16 signature count, the 64-byte
//! signatures in account-key order, then the message itself. The message
//! opens with a three-byte header (required signature count, read-only
//! signed count, read-only unsigned count), followed by the
//! compact-u16-prefixed account table, the 32-byte recent blockhash, and
//! the compiled instructions. Each compiled instruction is a one-byte
//! program-id index, a compact-u16-prefixed list of indices into the
//! account table, and compact-u16-prefixed opaque instruction data.
//!
//! No `solana-sdk` dependency; every length prefix uses the compact-u16
//! (shortvec) encoding defined below.

use crate::error::CoreError;
use crate::pubkey::Pubkey;
use crate::signer::Keypair;

// ---------------------------------------------------------------------------
// Compact-u16 encoding
// ---------------------------------------------------------------------------

/// Encode a length prefix in compact-u16 (shortvec) form.
///
/// Seven value bits per byte, least significant group first, with the
/// high bit marking a continuation. A `u16` never needs more than three
/// bytes.
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// Decode a compact-u16 length prefix from the front of `data`.
///
/// Returns the value together with the number of bytes it occupied.
/// Fails when the input runs out mid-value or the accumulated value
/// exceeds `u16::MAX`.
pub fn decode_compact_u16(data: &[u8]) -> Result<(u16, usize), CoreError> {
    let mut value: u32 = 0;
    let mut shift = 0u32;
    let mut consumed = 0usize;

    loop {
        if consumed >= data.len() {
            return Err(CoreError::TransactionBuild(
                "unexpected end of data while decoding compact-u16".into(),
            ));
        }
        let byte = data[consumed];
        consumed += 1;

        value |= ((byte & 0x7f) as u32) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            break;
        }
        if consumed >= 3 {
            break;
        }
    }

    if value > u16::MAX as u32 {
        return Err(CoreError::TransactionBuild(
            "compact-u16 value overflow".into(),
        ));
    }

    Ok((value as u16, consumed))
}

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A single account reference in an instruction: the ordered
/// `(address, is_writable, is_signer)` triple the runtime consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn writable(pubkey: Pubkey) -> Self {
        AccountMeta {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    pub fn readonly(pubkey: Pubkey) -> Self {
        AccountMeta {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }

    pub fn signer(pubkey: Pubkey) -> Self {
        AccountMeta {
            pubkey,
            is_signer: true,
            is_writable: true,
        }
    }

    pub fn readonly_signer(pubkey: Pubkey) -> Self {
        AccountMeta {
            pubkey,
            is_signer: true,
            is_writable: false,
        }
    }
}

/// An instruction before it is compiled into a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// A complete transaction (unsigned or partially signed).
#[derive(Debug, Clone)]
pub struct Transaction {
    /// All account keys referenced by this transaction, in canonical order:
    ///   1. writable signers (fee payer first)
    ///   2. read-only signers
    ///   3. writable non-signers
    ///   4. read-only non-signers
    pub account_keys: Vec<Pubkey>,

    /// Number of required signatures (first N accounts are signers).
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,

    pub recent_blockhash: [u8; 32],

    /// Compiled instructions (account references replaced with indices).
    pub compiled_instructions: Vec<CompiledInstruction>,
}

/// A compiled instruction where account references are replaced by u8
/// indices into the transaction's `account_keys` array.
#[derive(Debug, Clone)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Transaction building
// ---------------------------------------------------------------------------

/// Build a transaction from a set of instructions with a single fee payer.
///
/// The fee payer is always the first signer and is placed at index 0 in the
/// account keys.
pub fn compile_transaction(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    recent_blockhash: &[u8; 32],
) -> Result<Transaction, CoreError> {
    // Unique account keys with their permission bits. A plain Vec keeps
    // insertion order and instruction account lists are tiny.
    struct AccountEntry {
        pubkey: Pubkey,
        is_signer: bool,
        is_writable: bool,
    }

    let mut entries: Vec<AccountEntry> = Vec::new();

    let mut upsert = |pubkey: Pubkey, signer: bool, writable: bool| {
        if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == pubkey) {
            entry.is_signer |= signer;
            entry.is_writable |= writable;
        } else {
            entries.push(AccountEntry {
                pubkey,
                is_signer: signer,
                is_writable: writable,
            });
        }
    };

    // Fee payer is always signer + writable.
    upsert(*fee_payer, true, true);

    for ix in instructions {
        for meta in &ix.accounts {
            upsert(meta.pubkey, meta.is_signer, meta.is_writable);
        }
        // Program IDs are non-signer, read-only accounts.
        upsert(ix.program_id, false, false);
    }

    // Canonical order. Stable sort keeps insertion order within a rank, so
    // the fee payer stays at index 0.
    entries.sort_by_key(|e| match (e.is_signer, e.is_writable) {
        (true, true) => 0u8,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    });

    let num_signers = entries.iter().filter(|e| e.is_signer).count() as u8;
    let num_readonly_signed = entries
        .iter()
        .filter(|e| e.is_signer && !e.is_writable)
        .count() as u8;
    let num_readonly_unsigned = entries
        .iter()
        .filter(|e| !e.is_signer && !e.is_writable)
        .count() as u8;

    let account_keys: Vec<Pubkey> = entries.iter().map(|e| e.pubkey).collect();

    // Replace pubkeys with indices.
    let mut compiled = Vec::with_capacity(instructions.len());
    for ix in instructions {
        let program_id_index = account_keys
            .iter()
            .position(|k| *k == ix.program_id)
            .ok_or_else(|| CoreError::TransactionBuild("program_id not in account keys".into()))?
            as u8;

        let mut account_indices = Vec::with_capacity(ix.accounts.len());
        for meta in &ix.accounts {
            let idx = account_keys
                .iter()
                .position(|k| *k == meta.pubkey)
                .ok_or_else(|| {
                    CoreError::TransactionBuild("account not in account keys".into())
                })? as u8;
            account_indices.push(idx);
        }

        compiled.push(CompiledInstruction {
            program_id_index,
            account_indices,
            data: ix.data.clone(),
        });
    }

    Ok(Transaction {
        account_keys,
        num_required_signatures: num_signers,
        num_readonly_signed,
        num_readonly_unsigned,
        recent_blockhash: *recent_blockhash,
        compiled_instructions: compiled,
    })
}

/// Serialize the transaction message (the bytes that get signed).
pub fn serialize_message(tx: &Transaction) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);

    // Header: 3 bytes.
    buf.push(tx.num_required_signatures);
    buf.push(tx.num_readonly_signed);
    buf.push(tx.num_readonly_unsigned);

    // Account keys.
    buf.extend_from_slice(&encode_compact_u16(tx.account_keys.len() as u16));
    for key in &tx.account_keys {
        buf.extend_from_slice(key.as_bytes());
    }

    buf.extend_from_slice(&tx.recent_blockhash);

    // Instructions.
    buf.extend_from_slice(&encode_compact_u16(tx.compiled_instructions.len() as u16));
    for ix in &tx.compiled_instructions {
        buf.push(ix.program_id_index);

        buf.extend_from_slice(&encode_compact_u16(ix.account_indices.len() as u16));
        buf.extend_from_slice(&ix.account_indices);

        buf.extend_from_slice(&encode_compact_u16(ix.data.len() as u16));
        buf.extend_from_slice(&ix.data);
    }

    buf
}

/// Sign and serialize a transaction into its wire format.
///
/// Every signer slot in the message must be covered by one of the supplied
/// keypairs; the slot for a keypair that is not required is an error too,
/// caught by the coverage check. The resulting bytes are ready for a
/// `sendTransaction` RPC call.
pub fn sign_transaction(tx: &Transaction, signers: &[&Keypair]) -> Result<Vec<u8>, CoreError> {
    let message_bytes = serialize_message(tx);
    let num_required = tx.num_required_signatures as usize;

    if num_required > tx.account_keys.len() {
        return Err(CoreError::TransactionBuild(
            "more required signatures than account keys".into(),
        ));
    }

    // One 64-byte slot per required signer, in account-key order.
    let mut signatures: Vec<Option<[u8; 64]>> = vec![None; num_required];

    for keypair in signers {
        let pubkey = keypair.pubkey();
        let slot = tx.account_keys[..num_required]
            .iter()
            .position(|k| *k == pubkey)
            .ok_or_else(|| {
                CoreError::Signing(format!("{pubkey} is not a required signer"))
            })?;
        signatures[slot] = Some(keypair.sign(&message_bytes));
    }

    let mut wire = Vec::with_capacity(3 + 64 * num_required + message_bytes.len());
    wire.extend_from_slice(&encode_compact_u16(num_required as u16));

    for (i, slot) in signatures.into_iter().enumerate() {
        let sig = slot.ok_or_else(|| {
            CoreError::Signing(format!(
                "missing signature for required signer {}",
                tx.account_keys[i]
            ))
        })?;
        wire.extend_from_slice(&sig);
    }

    wire.extend_from_slice(&message_bytes);

    Ok(wire)
}
