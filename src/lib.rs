#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::{Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Quorum percentages are expressed out of 100
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TreasuryDao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        contribution_window_seconds: u64,
        vote_window_seconds: u64,
        quorum_percent: u64,
    ) {
        require!(
            contribution_window_seconds > 0,
            "Contribution window must be greater than zero"
        );
        require!(
            vote_window_seconds > 0,
            "Vote window must be greater than zero"
        );
        require!(
            quorum_percent <= PERCENT_DENOMINATOR,
            "Quorum percent cannot exceed 100"
        );

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.admin().set(&caller);
        self.contribution_deadline()
            .set(now + contribution_window_seconds);
        self.vote_window().set(vote_window_seconds);
        self.quorum_percent().set(quorum_percent);
        self.total_shares().set(BigUint::zero());
        self.available_funds().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Shares are minted 1:1 against the attached payment.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        // Window gate comes first: a late call is rejected no matter the amount
        let now = self.blockchain().get_block_timestamp();
        require!(
            now <= self.contribution_deadline().get(),
            "Contribution window has closed"
        );

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Contribution must be greater than zero");

        let caller = self.blockchain().get_caller();
        self.shares(&caller).update(|s| *s += &payment);
        self.total_shares().update(|ts| *ts += &payment);
        self.available_funds().update(|af| *af += &payment);

        let share_balance = self.shares(&caller).get();
        self.contribute_event(&caller, &payment, &share_balance);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Reserves the requested amount so two open proposals can
    // never commit the same funds. Independent of the
    // contribution phase.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.is_investor(&caller), "Only investors can propose");
        require!(
            amount <= self.available_funds().get(),
            "Insufficient available funds"
        );

        self.available_funds().update(|af| *af -= &amount);

        let proposal_id = self.proposal_count().get();
        let voting_deadline =
            self.blockchain().get_block_timestamp() + self.vote_window().get();

        let proposal = Proposal {
            id: proposal_id,
            name,
            creator: caller.clone(),
            recipient: recipient.clone(),
            amount: amount.clone(),
            voting_deadline,
            votes_weight: BigUint::zero(),
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, &recipient, &amount);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Yes-only voting weighted by the caller's share balance.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.is_investor(&caller), "Only investors can vote");
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            "Already voted"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.executed, "Proposal already executed");

        let now = self.blockchain().get_block_timestamp();
        require!(
            now <= proposal.voting_deadline,
            "Voting period has expired"
        );

        let weight = self.shares(&caller).get();
        proposal.votes_weight += &weight;
        self.proposals(proposal_id).set(&proposal);
        self.has_voted(proposal_id, &caller).set(true);

        self.vote_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone can trigger execution once voting has closed.
    // Quorum is re-evaluated on every call against the current
    // total shares, so a failed attempt leaves the proposal
    // pending rather than rejected.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.executed, "Proposal already executed");

        let now = self.blockchain().get_block_timestamp();
        require!(
            now > proposal.voting_deadline,
            "Voting period has not ended"
        );

        let total_shares = self.total_shares().get();
        let vote_percent =
            (&proposal.votes_weight * PERCENT_DENOMINATOR) / &total_shares;
        require!(
            vote_percent >= self.quorum_percent().get(),
            "Quorum not reached"
        );

        // Executed flag is stored before the transfer leaves the contract
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.send()
            .direct_egld(&proposal.recipient, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: adminWithdraw
    // Break-glass primitive. The only path by which funds leave
    // the treasury without a passed vote.
    // ========================================================

    #[endpoint(adminWithdraw)]
    fn admin_withdraw(&self, amount: BigUint, recipient: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), "Only admin can withdraw");
        require!(
            amount <= self.available_funds().get(),
            "Insufficient available funds"
        );

        self.available_funds().update(|af| *af -= &amount);

        self.send().direct_egld(&recipient, &amount);
        self.admin_withdraw_event(&recipient, &amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isInvestor)]
    fn is_investor(&self, address: &ManagedAddress) -> bool {
        self.shares(address).get() > 0u64
    }

    #[view(getShares)]
    fn get_shares(&self, address: &ManagedAddress) -> BigUint {
        self.shares(address).get()
    }

    #[view(getAvailableFunds)]
    fn get_available_funds(&self) -> BigUint {
        self.available_funds().get()
    }

    #[view(getTotalShares)]
    fn get_total_shares(&self) -> BigUint {
        self.total_shares().get()
    }

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.proposals(id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        // Ids are dense and never reused, so a plain range suffices
        let end = core::cmp::min(from.saturating_add(count), total);
        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, id: u64) -> ProposalStatus {
        require!(!self.proposals(id).is_empty(), "Proposal does not exist");

        let proposal = self.proposals(id).get();
        if proposal.executed {
            return ProposalStatus::Executed;
        }
        let now = self.blockchain().get_block_timestamp();
        if now <= proposal.voting_deadline {
            ProposalStatus::Open
        } else {
            ProposalStatus::Closed
        }
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(hasInvestorVoted)]
    fn has_investor_voted(&self, proposal_id: u64, address: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, address).get()
    }

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(getContributionDeadline)]
    fn get_contribution_deadline(&self) -> u64 {
        self.contribution_deadline().get()
    }

    #[view(getVoteWindow)]
    fn get_vote_window(&self) -> u64 {
        self.vote_window().get()
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> u64 {
        self.quorum_percent().get()
    }

    #[view(getDaoConfig)]
    fn get_dao_config(&self) -> MultiValue4<ManagedAddress, u64, u64, u64> {
        let admin = self.admin().get();
        let deadline = self.contribution_deadline().get();
        let vote_window = self.vote_window().get();
        let quorum = self.quorum_percent().get();
        (admin, deadline, vote_window, quorum).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribute")]
    fn contribute_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        share_balance: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("adminWithdraw")]
    fn admin_withdraw_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("contributionDeadline")]
    fn contribution_deadline(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("voteWindow")]
    fn vote_window(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumPercent")]
    fn quorum_percent(&self) -> SingleValueMapper<u64>;

    // ── Treasury ledger ──

    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("shares")]
    fn shares(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Funds not reserved by a pending or passed-but-unexecuted proposal
    #[storage_mapper("availableFunds")]
    fn available_funds(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
