multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — derived lifecycle state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window is open. Investors can add weighted votes.
    Open,
    /// Voting window elapsed without execution. Stays pending until
    /// an executeProposal call clears quorum.
    Closed,
    /// Funds sent to the recipient. Terminal state.
    Executed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub recipient: ManagedAddress<M>,
    /// Requested disbursement, reserved out of availableFunds at creation
    pub amount: BigUint<M>,
    /// Block timestamp after which voting closes and execution opens
    pub voting_deadline: u64,
    /// Sum of the share balances of everyone who voted yes
    pub votes_weight: BigUint<M>,
    pub executed: bool,
}
