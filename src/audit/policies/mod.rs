mod branch_policy;

pub use branch_policy::BranchPolicy;
