use serde::{Deserialize, Serialize};

/// Funnel stage of one client-trainer relationship.
///
/// The happy path advances monotonically from `Browsing` through
/// `ActiveClient`. Decline and unmatch are lateral moves allowed from any
/// non-terminal stage. Records are created at first interaction and retained
/// forever; stages only move via the transitions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementStage {
    Browsing,
    Liked,
    Shortlisted,
    DiscoveryCallBooked,
    DiscoveryCallCompleted,
    Matched,
    Agreed,
    PaymentPending,
    ActiveClient,
    Unmatched,
    Declined,
    DeclinedDismissed,
}

impl EngagementStage {
    /// Stages eligible for the matching pool. A trainer the client has already
    /// engaged beyond browsing is excluded from scoring.
    pub fn browsing_eligible(self) -> bool {
        matches!(self, Self::Browsing)
    }

    /// Next stage on the happy path, if any.
    pub fn next_happy_path(self) -> Option<Self> {
        match self {
            Self::Browsing => Some(Self::Liked),
            Self::Liked => Some(Self::Shortlisted),
            Self::Shortlisted => Some(Self::DiscoveryCallBooked),
            Self::DiscoveryCallBooked => Some(Self::DiscoveryCallCompleted),
            Self::DiscoveryCallCompleted => Some(Self::Matched),
            Self::Matched => Some(Self::Agreed),
            Self::Agreed => Some(Self::PaymentPending),
            Self::PaymentPending => Some(Self::ActiveClient),
            Self::ActiveClient
            | Self::Unmatched
            | Self::Declined
            | Self::DeclinedDismissed => None,
        }
    }

    /// Whether a stage change is allowed.
    ///
    /// Forward moves follow the happy path one step at a time. Lateral moves:
    /// either side may decline from any pre-terminal stage, an active or
    /// matched relationship may be unmatched, and a decline may be dismissed
    /// from the client's view.
    pub fn can_transition(self, to: Self) -> bool {
        if self == to {
            return false;
        }
        if self.next_happy_path() == Some(to) {
            return true;
        }
        match to {
            Self::Declined => !matches!(
                self,
                Self::ActiveClient | Self::Unmatched | Self::Declined | Self::DeclinedDismissed
            ),
            Self::Unmatched => matches!(
                self,
                Self::Matched | Self::Agreed | Self::PaymentPending | Self::ActiveClient
            ),
            Self::DeclinedDismissed => self == Self::Declined,
            _ => false,
        }
    }
}
