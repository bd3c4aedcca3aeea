//! Group Reply
//!
//! The parsed outcome of one routing pass: an ordered sequence of reply
//! lines, each attributed to exactly one character from the herd.

use serde::{Deserialize, Serialize};

use super::Character;

/// One attributed line of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyLine {
    pub speaker: Character,
    pub text: String,
}

/// An ordered, fully attributed group reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReply {
    pub lines: Vec<ReplyLine>,
}

impl GroupReply {
    /// A one-line reply from a single speaker (intercept responses).
    pub fn single(speaker: Character, text: impl Into<String>) -> Self {
        Self {
            lines: vec![ReplyLine {
                speaker,
                text: text.into(),
            }],
        }
    }

    /// Newline-joined `[Name] text` rendering, the shape the UI displays.
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("[{}] {}", line.speaker, line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Speaker display names, parallel to the rendered lines.
    pub fn speakers(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.speaker.display_name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_renders_speaker_tags() {
        let reply = GroupReply {
            lines: vec![
                ReplyLine {
                    speaker: Character::Nimbus,
                    text: "Wheek wheek!".to_string(),
                },
                ReplyLine {
                    speaker: Character::Oki,
                    text: "Kawaii!".to_string(),
                },
            ],
        };
        assert_eq!(
            reply.content(),
            "[Nimbus] Wheek wheek!\n[o\u{35e}ki] Kawaii!"
        );
        assert_eq!(reply.speakers(), vec!["Nimbus", "o\u{35e}ki"]);
    }

    #[test]
    fn test_single_is_one_line() {
        let reply = GroupReply::single(Character::DrStoffels, "Is it safe?");
        assert_eq!(reply.lines.len(), 1);
        assert_eq!(reply.content(), "[Dr. Stoffels] Is it safe?");
    }
}
