// Transfer Fee Types

use soroban_sdk::contracttype;

/// Fee charged by a token on every transfer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferFee {
    /// First epoch this fee applies to
    pub epoch: u64,
    /// Fee rate in basis points (10000 = 100%)
    pub fee_bps: u32,
    /// Cap on the fee of one transfer; UNCAPPED_MAX_FEE means no cap
    pub max_fee: u128,
}

/// Two-slot fee schedule: the newer fee takes over at its epoch
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferFeeConfig {
    pub older_transfer_fee: TransferFee,
    pub newer_transfer_fee: TransferFee,
}

impl TransferFeeConfig {
    /// Same fee in both slots
    pub fn constant(fee_bps: u32, max_fee: u128) -> Self {
        let fee = TransferFee { epoch: 0, fee_bps, max_fee };
        Self {
            older_transfer_fee: fee.clone(),
            newer_transfer_fee: fee,
        }
    }

    /// Fee in force at `epoch`
    #[inline]
    pub fn fee_in_force(&self, epoch: u64) -> &TransferFee {
        if epoch >= self.newer_transfer_fee.epoch {
            &self.newer_transfer_fee
        } else {
            &self.older_transfer_fee
        }
    }
}

/// Amount left after the sender pays the transfer fee
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransferFeeExcludedAmount {
    pub amount: u128,
    pub fee: u128,
}

/// Amount the sender must send so the receiver gets the requested amount
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransferFeeIncludedAmount {
    pub amount: u128,
    pub fee: u128,
}
