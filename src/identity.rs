//! Pool identity derivation.
//!
//! Three deterministic mappings tie a pool, its treasury authority, and
//! its LP mint together without any off-chain index:
//!
//! - [`treasurer`] — the program-derived authority owning both token
//!   treasuries, seeded by the pool key alone;
//! - [`proof_address`] — the 32-byte XOR binding installed as the LP
//!   mint's freeze authority at pool creation;
//! - [`derive_pool_address`] — the inverse: recover the pool from an LP
//!   mint's two authority fields, or `None` if the mint does not belong
//!   to any pool of the program.
//!
//! The XOR scheme is a tamper-evidence trick, not a cryptographic
//! primitive: it works because the freeze authority is attacker-fixed at
//! creation and the treasurer check closes the loop.

use solana_program::pubkey::Pubkey;

/// Bytewise XOR of three 32-byte keys.
///
/// Operand order is fixed by the deployed program; since XOR is
/// commutative the same helper serves derivation and inversion.
fn xor3(x: &Pubkey, y: &Pubkey, z: &Pubkey) -> Pubkey {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = x.as_ref()[i] ^ y.as_ref()[i] ^ z.as_ref()[i];
    }
    Pubkey::new_from_array(bytes)
}

/// Derives the treasury authority for a pool.
///
/// A program-derived address with the pool's own key as the sole seed.
/// The on-chain program signs with this authority internally; the engine
/// only ever recomputes it.
///
/// # Examples
///
/// ```
/// use amm_oracle::identity::treasurer;
/// use solana_program::pubkey::Pubkey;
///
/// let pool = Pubkey::new_unique();
/// let program_id = Pubkey::new_unique();
/// assert_eq!(
///     treasurer(&pool, &program_id),
///     treasurer(&pool, &program_id),
/// );
/// ```
#[must_use]
pub fn treasurer(pool: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[pool.as_ref()], program_id).0
}

/// Derives the proof address binding an LP mint to its pool.
///
/// `program_id ⊕ pool ⊕ treasurer`, bytewise over the raw 32-byte keys.
/// Installed as the LP mint's freeze authority at pool creation, so any
/// observer holding the mint's authority fields can verify pool
/// membership via [`derive_pool_address`].
#[must_use]
pub fn proof_address(pool: &Pubkey, treasurer: &Pubkey, program_id: &Pubkey) -> Pubkey {
    xor3(program_id, pool, treasurer)
}

/// Recovers the pool address from an LP mint's authority fields.
///
/// The candidate pool is `program_id ⊕ freeze_authority ⊕ mint_authority`;
/// it is accepted only if its re-derived [`treasurer`] equals
/// `mint_authority`.  A failed check returns `None`: the mint simply does
/// not belong to any pool of this program, which is an expected lookup
/// outcome rather than a fault.
#[must_use]
pub fn derive_pool_address(
    mint_authority: &Pubkey,
    freeze_authority: &Pubkey,
    program_id: &Pubkey,
) -> Option<Pubkey> {
    let pool = xor3(program_id, freeze_authority, mint_authority);
    (treasurer(&pool, program_id) == *mint_authority).then_some(pool)
}
