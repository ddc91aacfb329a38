multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Block time is before the deadline. Members can vote.
    Open,
    /// Deadline passed and yes > no. Anyone can trigger execution.
    Approved,
    /// Deadline passed and yes <= no. Terminal by abandonment.
    Rejected,
    /// Funds released. Terminal state.
    Executed,
}

impl ProposalStatus {
    /// Evaluates the lifecycle position from recorded facts only.
    pub fn evaluate(executed: bool, deadline: u64, now: u64, votes_for: u64, votes_against: u64) -> Self {
        if executed {
            ProposalStatus::Executed
        } else if now < deadline {
            ProposalStatus::Open
        } else if is_approved(votes_for, votes_against) {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        }
    }
}

/// Strict majority of cast ballots. A tie rejects.
pub fn is_approved(votes_for: u64, votes_against: u64) -> bool {
    votes_for > votes_against
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// Payee. Need not be a member.
    pub target: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub description: ManagedBuffer<M>,
    /// Block timestamp (seconds) at which voting closes and execution opens.
    pub deadline: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_voting_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    pub fn status(&self, now: u64) -> ProposalStatus {
        ProposalStatus::evaluate(
            self.executed,
            self.deadline,
            now,
            self.votes_for,
            self.votes_against,
        )
    }
}
