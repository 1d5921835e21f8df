//! Program address derivation shared by callers and the program's seed
//! constraints. The first seed is always a namespace tag, so addresses from
//! different namespaces never collide even for identical identities.

use anchor_lang::prelude::*;

use crate::constants::{MINT_SEED, POT_SEED, PROTOCOL_SEED, TOKEN_SEED};

pub fn find_protocol_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROTOCOL_SEED], program_id)
}

pub fn find_pot_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POT_SEED], program_id)
}

pub fn find_mint_address(program_id: &Pubkey, subject: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED, subject.as_ref()], program_id)
}

pub fn find_token_address(program_id: &Pubkey, holder: &Pubkey, subject: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_SEED, holder.as_ref(), subject.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let subject = Pubkey::new_unique();
        assert_eq!(
            find_mint_address(&crate::ID, &subject),
            find_mint_address(&crate::ID, &subject)
        );
        assert_eq!(find_pot_address(&crate::ID), find_pot_address(&crate::ID));
    }

    #[test]
    fn namespaces_and_identities_are_distinct() {
        let holder = Pubkey::new_unique();
        let subject = Pubkey::new_unique();

        let protocol = find_protocol_address(&crate::ID).0;
        let pot = find_pot_address(&crate::ID).0;
        let mint = find_mint_address(&crate::ID, &subject).0;
        let other_mint = find_mint_address(&crate::ID, &holder).0;
        let token = find_token_address(&crate::ID, &holder, &subject).0;
        let reversed = find_token_address(&crate::ID, &subject, &holder).0;

        let all = [protocol, pot, mint, other_mint, token, reversed];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn stored_bump_recreates_address() {
        let subject = Pubkey::new_unique();
        let (mint, bump) = find_mint_address(&crate::ID, &subject);
        let recreated =
            Pubkey::create_program_address(&[MINT_SEED, subject.as_ref(), &[bump]], &crate::ID)
                .unwrap();
        assert_eq!(recreated, mint);
    }
}
