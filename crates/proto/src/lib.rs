//! Peer protocol - JSON message types for versus play.
//!
//! The two peers exchange small line-delimited JSON messages over whatever
//! transport carries them; this crate defines the messages and the clock
//! arithmetic, nothing else. Messages are tagged on a short `t` field to
//! keep frames tiny:
//!
//! ```text
//! {"t":"hello","seed":1724371200000,"ver":"1.0.0","now":1724371200000}
//! {"t":"attack","at":1724371205000,"rows":2}
//! {"t":"emote","id":3}
//! {"t":"gameover","winner":"you"}
//! ```
//!
//! The host's `hello` carries the shared seed and the host's clock reading;
//! the guest captures the clock offset once at that moment and converts
//! every later `attack` timestamp into its own timeline. Peers never
//! exchange board state: determinism from the shared seed keeps both
//! simulations of each board identical.

use serde::{Deserialize, Serialize};

use letterfall_core::attacks::Attack;

/// Wire protocol version carried in `hello`. Peers on different versions
/// should refuse to start a match.
pub const PROTOCOL_VERSION: &str = "1.0.0";

/// Everything one peer can say to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "lowercase")]
pub enum Message {
    /// Match start, sent by the host. `now` is the host's clock in ms.
    Hello { seed: u64, ver: String, now: u64 },
    /// Junk rows incoming. `at` is the due time on the sender's clock.
    Attack { at: u64, rows: u32 },
    /// Canned taunt by index.
    Emote { id: u32 },
    /// Sender's board topped out; `winner` names the recipient's side.
    Gameover { winner: Winner },
}

/// Who won, from the message sender's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Me,
    You,
}

impl Message {
    /// Host's match-start message.
    pub fn hello(seed: u64, now_ms: u64) -> Self {
        Message::Hello {
            seed,
            ver: PROTOCOL_VERSION.to_string(),
            now: now_ms,
        }
    }

    /// Announce a scheduled attack. The timestamp is the sender's; the
    /// recipient converts it with its [`ClockOffset`].
    pub fn attack(attack: &Attack) -> Self {
        Message::Attack {
            at: attack.timestamp,
            rows: attack.rows,
        }
    }

    /// Concede: the sender topped out, so the recipient won.
    pub fn game_over_conceded() -> Self {
        Message::Gameover {
            winner: Winner::You,
        }
    }
}

/// Serialize a message to its wire form.
pub fn encode(message: &Message) -> serde_json::Result<String> {
    serde_json::to_string(message)
}

/// Parse one wire frame. Unknown tags and malformed frames are errors;
/// callers typically log and drop them.
pub fn decode(frame: &str) -> serde_json::Result<Message> {
    serde_json::from_str(frame)
}

/// Difference between the remote peer's clock and ours, captured once
/// from the `hello` exchange and applied to every later timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockOffset {
    offset_ms: i64,
}

impl ClockOffset {
    /// Capture the offset from the host's `now` and our own clock at the
    /// moment the `hello` arrived.
    pub fn from_hello(remote_now_ms: u64, local_now_ms: u64) -> Self {
        Self {
            offset_ms: local_now_ms as i64 - remote_now_ms as i64,
        }
    }

    /// Two synchronized clocks.
    pub fn zero() -> Self {
        Self { offset_ms: 0 }
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    /// Convert a remote timestamp into our timeline.
    pub fn to_local(&self, remote_ms: u64) -> u64 {
        (remote_ms as i64 + self.offset_ms).max(0) as u64
    }
}

/// Turn a received attack message into a locally scheduled [`Attack`],
/// re-stamped into our timeline.
pub fn incoming_attack(at: u64, rows: u32, offset: ClockOffset) -> Attack {
    Attack {
        timestamp: offset.to_local(at),
        rows,
        applied: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterfall_core::attacks::create_attack;

    #[test]
    fn test_hello_wire_shape() {
        let message = Message::hello(42, 1_000);
        let frame = encode(&message).unwrap();
        assert_eq!(frame, r#"{"t":"hello","seed":42,"ver":"1.0.0","now":1000}"#);
        assert_eq!(decode(&frame).unwrap(), message);
    }

    #[test]
    fn test_attack_wire_shape() {
        let attack = create_attack(5, 4_000);
        let frame = encode(&Message::attack(&attack)).unwrap();
        assert_eq!(frame, r#"{"t":"attack","at":5000,"rows":2}"#);
    }

    #[test]
    fn test_gameover_wire_shape() {
        let frame = encode(&Message::game_over_conceded()).unwrap();
        assert_eq!(frame, r#"{"t":"gameover","winner":"you"}"#);
    }

    #[test]
    fn test_emote_round_trip() {
        let frame = encode(&Message::Emote { id: 3 }).unwrap();
        assert_eq!(frame, r#"{"t":"emote","id":3}"#);
        assert_eq!(decode(&frame).unwrap(), Message::Emote { id: 3 });
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        assert!(decode(r#"{"t":"resync","full":true}"#).is_err());
        assert!(decode("not json").is_err());
    }

    #[test]
    fn test_clock_offset_in_both_directions() {
        // Remote clock 500ms ahead of ours.
        let offset = ClockOffset::from_hello(10_500, 10_000);
        assert_eq!(offset.offset_ms(), -500);
        assert_eq!(offset.to_local(11_500), 11_000);

        // Remote clock behind ours.
        let offset = ClockOffset::from_hello(9_000, 10_000);
        assert_eq!(offset.to_local(9_500), 10_500);
    }

    #[test]
    fn test_incoming_attack_is_restamped() {
        let offset = ClockOffset::from_hello(20_000, 5_000);
        let attack = incoming_attack(21_000, 2, offset);
        assert_eq!(attack.timestamp, 6_000);
        assert_eq!(attack.rows, 2);
        assert!(!attack.applied);
    }

    #[test]
    fn test_zero_offset_passes_timestamps_through() {
        let attack = incoming_attack(7_777, 1, ClockOffset::zero());
        assert_eq!(attack.timestamp, 7_777);
    }
}
