//! In-memory custody ledger.
//!
//! Implements `Custody` over per-token balances and allowances. Test hooks
//! make it refuse or fail transfers on demand.

use crate::domain::CustodyError;
use crate::ports::outbound::Custody;
use parking_lot::RwLock;
use shared_types::{Address, Amount, TokenId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// In-memory token ledger holding deposits under its own address.
pub struct InMemoryCustody {
    address: Address,
    balances: RwLock<HashMap<(TokenId, Address), Amount>>,
    /// (token, owner) -> amount custody may pull from owner.
    allowances: RwLock<HashMap<(TokenId, Address), Amount>>,
    refuse: RwLock<bool>,
    unavailable: RwLock<Option<String>>,
}

impl InMemoryCustody {
    /// Create an empty ledger; deposits are held under `address`.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            balances: RwLock::new(HashMap::new()),
            allowances: RwLock::new(HashMap::new()),
            refuse: RwLock::new(false),
            unavailable: RwLock::new(None),
        }
    }

    /// Address deposits are held under.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Credit `amount` of `token` to `owner`.
    pub fn mint(&self, token: TokenId, owner: Address, amount: Amount) {
        let mut balances = self.balances.write();
        let entry = balances.entry((token, owner)).or_default();
        *entry = entry.saturating_add(amount);
    }

    /// Let custody pull up to `amount` of `token` from `owner`.
    pub fn approve(&self, token: TokenId, owner: Address, amount: Amount) {
        self.allowances.write().insert((token, owner), amount);
    }

    /// Balance of `owner` in `token`.
    pub fn balance_of(&self, token: TokenId, owner: &Address) -> Amount {
        self.balances
            .read()
            .get(&(token, *owner))
            .copied()
            .unwrap_or_default()
    }

    /// Make every transfer return `false` for testing.
    pub fn set_refuse(&self, refuse: bool) {
        *self.refuse.write() = refuse;
    }

    /// Make every transfer fail with an error for testing.
    pub fn set_unavailable(&self, reason: Option<&str>) {
        *self.unavailable.write() = reason.map(str::to_string);
    }

    fn precheck(&self) -> Result<bool, CustodyError> {
        if let Some(reason) = self.unavailable.read().clone() {
            warn!(reason = %reason, "[pc-05] Custody unavailable");
            return Err(CustodyError::Unavailable(reason));
        }
        Ok(!*self.refuse.read())
    }
}

impl Custody for InMemoryCustody {
    fn transfer_from(
        &self,
        token: TokenId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<bool, CustodyError> {
        if !self.precheck()? {
            return Ok(false);
        }

        let mut allowances = self.allowances.write();
        let allowance = allowances.get(&(token, *from)).copied().unwrap_or_default();
        if allowance < amount {
            return Err(CustodyError::InsufficientAllowance {
                available: allowance,
                required: amount,
            });
        }

        let mut balances = self.balances.write();
        move_balance(&mut balances, token, from, to, amount)?;
        allowances.insert((token, *from), allowance - amount);

        debug!(token, amount = %amount, "[pc-05] Custody pulled deposit");
        Ok(true)
    }

    fn transfer(&self, token: TokenId, to: &Address, amount: Amount) -> Result<bool, CustodyError> {
        if !self.precheck()? {
            return Ok(false);
        }

        let mut balances = self.balances.write();
        move_balance(&mut balances, token, &self.address, to, amount)?;
        debug!(token, amount = %amount, "[pc-05] Custody paid out");
        Ok(true)
    }
}

fn move_balance(
    balances: &mut HashMap<(TokenId, Address), Amount>,
    token: TokenId,
    from: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), CustodyError> {
    let available = balances.get(&(token, *from)).copied().unwrap_or_default();
    if available < amount {
        return Err(CustodyError::InsufficientBalance {
            available,
            required: amount,
        });
    }
    balances.insert((token, *from), available - amount);
    let entry = balances.entry((token, *to)).or_default();
    *entry = entry.saturating_add(amount);
    Ok(())
}
