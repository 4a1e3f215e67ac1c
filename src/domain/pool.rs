//! Caller-supplied pool snapshot and its state-checked quote surface.

use solana_program::pubkey::Pubkey;

use crate::curve::{self, SwapOutcome};
use crate::domain::Ratio;
use crate::error::{OracleError, Result};
use crate::liquidity::{self, DepositOutcome, WithdrawOutcome};

/// Lifecycle state of an on-chain pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoolState {
    /// Account exists but the pool was never seeded.
    #[default]
    Uninitialized,
    /// Live: swaps, deposits, and withdrawals are all valid.
    Initialized,
    /// Trading and deposits halted by the pool owner; exit stays open.
    Frozen,
}

impl PoolState {
    /// Returns `true` if the pool accepts swaps and deposits.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized)
    }
}

/// Which reserve is the bid side of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token A, receive token B.
    AtoB,
    /// Sell token B, receive token A.
    BtoA,
}

/// A point-in-time snapshot of an on-chain pool account.
///
/// Decoded by the account-layer collaborator and handed in by value; the
/// engine never mutates it — every quote returns the new reserve/supply
/// values the program would hold *if* the quoted operation executed.  A
/// snapshot is only as fresh as the fetch that produced it; staleness
/// handling belongs to the caller.
///
/// # Examples
///
/// ```
/// use amm_oracle::domain::{Pool, PoolState, Ratio, SwapDirection};
///
/// let pool = Pool {
///     reserve_a: 1_000_000,
///     reserve_b: 2_000_000,
///     lp_supply: 1_414_213,
///     state: PoolState::Initialized,
///     ..Pool::default()
/// };
/// let out = pool.quote_swap(SwapDirection::AtoB, 1_000).expect("quote");
/// assert!(out.ask_amount > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pool {
    /// Pool owner, allowed to freeze/thaw and retune ratios.
    pub owner: Pubkey,
    /// LP-token mint whose authorities encode the pool identity.
    pub mint_lpt: Pubkey,
    /// Protocol account receiving the tax side of every swap.
    pub taxman: Pubkey,
    /// Mint of token A.
    pub mint_a: Pubkey,
    /// Program-owned treasury holding the A reserve.
    pub treasury_a: Pubkey,
    /// Mint of token B.
    pub mint_b: Pubkey,
    /// Program-owned treasury holding the B reserve.
    pub treasury_b: Pubkey,
    /// Current A-side reserve.
    pub reserve_a: u64,
    /// Current B-side reserve.
    pub reserve_b: u64,
    /// Outstanding LP tokens.
    pub lp_supply: u64,
    /// Value-preserving fraction of swap output retained by the pool.
    pub fee_ratio: Ratio,
    /// Value-extracting fraction routed to `taxman`.
    pub tax_ratio: Ratio,
    /// Lifecycle state.
    pub state: PoolState,
}

impl Pool {
    /// Current invariant `reserve_a * reserve_b`.
    #[must_use]
    pub const fn k(&self) -> u128 {
        self.reserve_a as u128 * self.reserve_b as u128
    }

    const fn oriented(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::AtoB => (self.reserve_a, self.reserve_b),
            SwapDirection::BtoA => (self.reserve_b, self.reserve_a),
        }
    }

    fn ensure_trading(&self) -> Result<()> {
        match self.state {
            PoolState::Initialized => Ok(()),
            PoolState::Uninitialized => {
                Err(OracleError::InvalidState("pool is not initialized"))
            }
            PoolState::Frozen => Err(OracleError::InvalidState("pool is frozen")),
        }
    }

    fn ensure_exit(&self) -> Result<()> {
        match self.state {
            PoolState::Initialized | PoolState::Frozen => Ok(()),
            PoolState::Uninitialized => {
                Err(OracleError::InvalidState("pool is not initialized"))
            }
        }
    }

    /// Quotes a swap; see [`curve::swap`].
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] unless the pool is `Initialized`,
    /// otherwise whatever the curve rejects.
    pub fn quote_swap(&self, direction: SwapDirection, bid_amount: u64) -> Result<SwapOutcome> {
        self.ensure_trading()?;
        let (reserve_bid, reserve_ask) = self.oriented(direction);
        curve::swap(bid_amount, reserve_bid, reserve_ask, self.fee_ratio, self.tax_ratio)
    }

    /// Quotes the bid required for a desired output; see
    /// [`curve::inverse_swap`].
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] unless the pool is `Initialized`,
    /// otherwise whatever the curve rejects.
    pub fn quote_inverse_swap(&self, direction: SwapDirection, ask_amount: u64) -> Result<u64> {
        self.ensure_trading()?;
        let (reserve_bid, reserve_ask) = self.oriented(direction);
        curve::inverse_swap(ask_amount, reserve_bid, reserve_ask, self.fee_ratio, self.tax_ratio)
    }

    /// Price impact of a hypothetical swap; see [`curve::slippage`].
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] unless the pool is `Initialized`,
    /// otherwise whatever the curve rejects.
    pub fn price_impact(&self, direction: SwapDirection, bid_amount: u64) -> Result<u64> {
        self.ensure_trading()?;
        let (reserve_bid, reserve_ask) = self.oriented(direction);
        curve::slippage(bid_amount, reserve_bid, reserve_ask, self.fee_ratio, self.tax_ratio)
    }

    /// Quotes a proportional deposit; see [`liquidity::deposit`].
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] unless the pool is `Initialized`,
    /// otherwise whatever the liquidity engine rejects.
    pub fn quote_deposit(&self, delta_a: u64, delta_b: u64) -> Result<DepositOutcome> {
        self.ensure_trading()?;
        liquidity::deposit(delta_a, delta_b, self.reserve_a, self.reserve_b, self.lp_supply)
    }

    /// Quotes a deposit of any ratio mix; see [`liquidity::sided_deposit`].
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] unless the pool is `Initialized`,
    /// otherwise whatever the liquidity engine rejects.
    pub fn quote_sided_deposit(&self, delta_a: u64, delta_b: u64) -> Result<DepositOutcome> {
        self.ensure_trading()?;
        liquidity::sided_deposit(
            delta_a,
            delta_b,
            self.reserve_a,
            self.reserve_b,
            self.lp_supply,
            self.fee_ratio,
            self.tax_ratio,
        )
    }

    /// Quotes a withdrawal; see [`liquidity::withdraw`].
    ///
    /// Permitted while `Frozen` — freezing halts trading, never exit.
    ///
    /// # Errors
    ///
    /// [`OracleError::InvalidState`] if the pool is `Uninitialized`,
    /// otherwise whatever the liquidity engine rejects.
    pub fn quote_withdraw(&self, lpt: u64) -> Result<WithdrawOutcome> {
        self.ensure_exit()?;
        liquidity::withdraw(lpt, self.lp_supply, self.reserve_a, self.reserve_b)
    }
}
