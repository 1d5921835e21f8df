use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    error::ErrorCode,
    helpers::{checked_add, checked_sub},
};

/// Moves lamports from the signing caller into a program account.
pub fn pay_in<'info>(
    payer: &Signer<'info>,
    to: AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: payer.to_account_info(),
                to,
            },
        ),
        amount,
    )
}

/// Lamports the caller can spend while its own account stays rent exempt.
pub fn spendable_lamports(payer: &Signer<'_>) -> Result<u64> {
    let floor = Rent::get()?.minimum_balance(0);
    Ok(above_floor(payer.lamports(), floor))
}

pub fn above_floor(lamports: u64, floor: u64) -> u64 {
    lamports.saturating_sub(floor)
}

/// Debits a program-owned account directly. The rent reserve is never touched
/// because callers only pay out tracked balances.
pub fn pay_out<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_lamports = from.lamports();
    require!(from_lamports >= amount, ErrorCode::InsufficientFunds);
    let to_lamports = checked_add(to.lamports(), amount)?;

    **from.try_borrow_mut_lamports()? = checked_sub(from_lamports, amount)?;
    **to.try_borrow_mut_lamports()? = to_lamports;

    Ok(())
}
