#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod safe_club_proxy;
pub mod types;

use errors::*;
use types::{is_approved, Proposal, ProposalStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait SafeClub {
    // ========================================================
    // Init / Upgrade
    // The deployer becomes administrator and first member.
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.administrator().set(&deployer);
        self.treasury_balance().set(BigUint::zero());
        self.proposal_count().set(0u64);

        self.enroll(&deployer);
        self.member_added_event(&deployer, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addMember
    // Administrator only. Re-adding a member is a silent no-op.
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);

        if self.members(&member).get() {
            return;
        }

        self.enroll(&member);
        self.member_added_event(&member, &caller);
    }

    // ========================================================
    // ENDPOINT: removeMember
    // Administrator only. Clears the flag; the roster entry and
    // any ballots already cast stay where they are.
    // ========================================================

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);

        if !self.members(&member).get() {
            return;
        }

        self.members(&member).set(false);
        self.member_removed_event(&member, &caller);
    }

    // ========================================================
    // ENDPOINT: deposit
    // Anyone can fund the treasury.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.treasury_balance().update(|balance| *balance += &amount);

        let balance = self.treasury_balance().get();
        self.deposit_event(&caller, &amount, &balance);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Members only. Solvency is not checked here: the balance
    // can move before execution, so it is checked there.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        target: ManagedAddress,
        amount: BigUint,
        description: ManagedBuffer,
        deadline: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let now = self.blockchain().get_block_timestamp();
        require!(deadline > now, ERR_INVALID_DEADLINE);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(
            target != self.blockchain().get_sc_address(),
            ERR_INVALID_TARGET
        );

        let proposal_id = self.proposal_count().get();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            target,
            amount,
            description,
            deadline,
            votes_for: 0u64,
            votes_against: 0u64,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.target,
            &proposal.amount,
            deadline,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One ballot per member per proposal, final once cast.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, support);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Public trigger once the deadline has passed. The executed
    // flag, the debit and the transfer commit or revert together.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let now = self.blockchain().get_block_timestamp();
        require!(!proposal.is_voting_open(now), ERR_VOTING_STILL_OPEN);
        require!(
            is_approved(proposal.votes_for, proposal.votes_against),
            ERR_PROPOSAL_REJECTED
        );
        require!(
            self.treasury_balance().get() >= proposal.amount,
            ERR_INSUFFICIENT_FUNDS
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        self.treasury_balance()
            .update(|balance| *balance -= &proposal.amount);

        self.send().direct_egld(&proposal.target, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.target, &proposal.amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_administrator(&self, caller: &ManagedAddress) {
        require!(
            *caller == self.administrator().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_member(&self, caller: &ManagedAddress) {
        require!(self.members(caller).get(), ERR_UNAUTHORIZED);
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// Sets the membership flag and appends to the roster on first sight.
    /// Roster entries are never removed, so positions stay stable.
    fn enroll(&self, member: &ManagedAddress) {
        self.members(member).set(true);
        self.member_list().insert(member.clone());
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getAdministrator)]
    fn get_administrator(&self) -> ManagedAddress {
        self.administrator().get()
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members(address).get()
    }

    /// Full roster in insertion order, removed members included.
    #[view(getMemberList)]
    fn get_member_list(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for address in self.member_list().iter() {
            result.push(address);
        }
        result
    }

    #[view(getMemberAt)]
    fn get_member_at(&self, index: u64) -> OptionalValue<ManagedAddress> {
        let len = self.member_list().len();
        if index >= len as u64 {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.member_list().get_by_index(index as usize + 1))
    }

    #[view(getRosterLength)]
    fn get_roster_length(&self) -> u64 {
        self.member_list().len() as u64
    }

    /// Roster filtered by the current membership flag.
    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for address in self.member_list().iter() {
            if self.members(&address).get() {
                result.push(address);
            }
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        if self.proposals(proposal_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.proposals(proposal_id).get())
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> OptionalValue<ProposalStatus> {
        if self.proposals(proposal_id).is_empty() {
            return OptionalValue::None;
        }
        let now = self.blockchain().get_block_timestamp();
        OptionalValue::Some(self.proposals(proposal_id).get().status(now))
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, proposal_id: u64, address: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, address).get()
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] administrator: &ManagedAddress,
    );

    #[event("memberRemoved")]
    fn member_removed_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] administrator: &ManagedAddress,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
        deadline: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    /// Append-only roster; never swap_remove from it.
    #[storage_mapper("memberList")]
    fn member_list(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Treasury ──

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
