//! Guest check-in for the kiosk view.
//!
//! Events that require an invitation start at a scan step. The guest enters
//! the code printed on their invitation, which is checked against the event's
//! invitations. A verified guest gets a welcome card and their seat
//! highlighted on the map.

use crate::types::{Layout, ShapeId};

/// A guest as shown on the kiosk welcome card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guest {
    /// Full name
    pub name: String,
    /// Company or organisation, if any
    pub org: Option<String>,
    /// Assigned seat; may be absent from the loaded layout
    pub seat_id: Option<ShapeId>,
    /// Dietary requirements, free text
    pub dietary: Option<String>,
    /// Accessibility needs, free text
    pub access: Option<String>,
    /// Badges such as `VIP` or `Speaker`
    pub tags: Vec<String>,
}

impl Guest {
    /// Where the guest sits, e.g. `A2 at Table 1`.
    ///
    /// Labels come from the layout so the card follows whatever plan is
    /// loaded. `None` when the seat is unassigned or missing from the layout.
    pub fn seat_summary(&self, layout: &Layout) -> Option<String> {
        let seat = layout.seat(self.seat_id.as_deref()?)?;
        let table = layout.table_for_seat(seat).map(|t| {
            if t.label.is_empty() {
                t.id.as_str()
            } else {
                t.label.as_str()
            }
        });
        Some(match (seat.label.is_empty(), table) {
            (false, Some(table)) => format!("{} at {table}", seat.label),
            (true, Some(table)) => table.to_string(),
            (false, None) => seat.label.clone(),
            (true, None) => seat.id.clone(),
        })
    }
}

/// An invitation the kiosk can verify.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    /// Code encoded in the invitation's QR, matched case-insensitively
    pub code: String,
    /// Whether the invitation is no longer valid
    pub expired: bool,
    /// Who the invitation belongs to
    pub guest: Guest,
}

/// Why a code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyFailure {
    /// No invitation carries this code.
    #[error("QR code is invalid or expired. Please contact event staff.")]
    Invalid,
    /// The invitation exists but has expired.
    #[error("Your QR code has expired. Please contact event staff for assistance.")]
    Expired,
}

/// Looks up a code among the event's invitations.
pub fn verify_code<'a>(code: &str, invitations: &'a [Invitation]) -> Result<&'a Guest, VerifyFailure> {
    let code = code.trim();
    if code.is_empty() {
        return Err(VerifyFailure::Invalid);
    }
    let invitation = invitations
        .iter()
        .find(|i| i.code.eq_ignore_ascii_case(code))
        .ok_or(VerifyFailure::Invalid)?;
    if invitation.expired {
        Err(VerifyFailure::Expired)
    } else {
        Ok(&invitation.guest)
    }
}

/// Where the kiosk is in the check-in flow.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckIn {
    /// No invitation needed; any guest may pick their seat
    Open,
    /// Waiting for a code
    Scan {
        /// Text typed so far
        code: String,
    },
    /// The last code was rejected
    Rejected(VerifyFailure),
    /// A guest checked in
    Welcome(Guest),
}

impl CheckIn {
    /// Initial step for an event.
    pub fn start(require_qr: bool) -> Self {
        if require_qr {
            CheckIn::Scan {
                code: String::new(),
            }
        } else {
            CheckIn::Open
        }
    }

    /// The checked-in guest, if any.
    pub fn guest(&self) -> Option<&Guest> {
        match self {
            CheckIn::Welcome(guest) => Some(guest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Seat, Table};

    fn invitations() -> Vec<Invitation> {
        vec![
            Invitation {
                code: "JS-2024".into(),
                expired: false,
                guest: Guest {
                    name: "John Smith".into(),
                    seat_id: Some("seat-2".into()),
                    ..Default::default()
                },
            },
            Invitation {
                code: "OLD-1".into(),
                expired: true,
                guest: Guest::default(),
            },
        ]
    }

    #[test]
    fn known_code_verifies_regardless_of_case_and_padding() {
        let invitations = invitations();
        let guest = verify_code("  js-2024 ", &invitations).unwrap();
        assert_eq!(guest.name, "John Smith");
    }

    #[test]
    fn unknown_empty_and_expired_codes_are_rejected() {
        let invitations = invitations();
        assert_eq!(verify_code("nope", &invitations), Err(VerifyFailure::Invalid));
        assert_eq!(verify_code("   ", &invitations), Err(VerifyFailure::Invalid));
        assert_eq!(verify_code("OLD-1", &invitations), Err(VerifyFailure::Expired));
        assert_eq!(verify_code("JS-2024", &[]), Err(VerifyFailure::Invalid));
    }

    #[test]
    fn seat_summary_reads_labels_from_layout() {
        let layout = Layout {
            tables: vec![Table::round("t1", "Table 1", (0.0, 0.0), 10.0)],
            seats: vec![
                Seat::new("seat-2", "A2", (0.0, 0.0), Some("t1")),
                Seat::new("loose", "Z9", (5.0, 5.0), Some("gone")),
            ],
        };
        let mut guest = Guest {
            seat_id: Some("seat-2".into()),
            ..Default::default()
        };
        assert_eq!(guest.seat_summary(&layout).as_deref(), Some("A2 at Table 1"));

        guest.seat_id = Some("loose".into());
        assert_eq!(guest.seat_summary(&layout).as_deref(), Some("Z9"));

        guest.seat_id = Some("missing".into());
        assert_eq!(guest.seat_summary(&layout), None);
        guest.seat_id = None;
        assert_eq!(guest.seat_summary(&layout), None);
    }

    #[test]
    fn check_in_starts_at_scan_only_when_required() {
        assert_eq!(CheckIn::start(false), CheckIn::Open);
        assert_eq!(
            CheckIn::start(true),
            CheckIn::Scan {
                code: String::new()
            }
        );
        assert!(CheckIn::start(true).guest().is_none());
    }
}
