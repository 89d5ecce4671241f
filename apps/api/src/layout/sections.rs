//! Zone splitter for enriched letter content.
//!
//! The enrichment call returns unstructured prose, so the letter's structure
//! is imposed by line position and keyword: the first 5 lines form the
//! recipient block, the next 5 the sender block, the contiguous run of lines
//! containing "subject" forms the date/subject block, and everything after
//! it is the body.
//!
//! The subject scan tracks its own cursor, separate from the fixed block
//! indices. If the subject run starts inside the sender block's range, the
//! sender block ends early so no line lands in two zones.

/// Number of lines in the recipient block.
pub const RECIPIENT_LINES: usize = 5;
/// Number of lines in the sender block.
pub const SENDER_LINES: usize = 5;

const SUBJECT_TOKEN: &str = "subject";

/// The four logical zones of the letter, in vertical rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterZones {
    pub recipient: Vec<String>,
    pub sender: Vec<String>,
    pub subject: Vec<String>,
    pub body: Vec<String>,
}

/// Partitions newline-delimited content into zones.
///
/// Shorter input simply yields shorter (possibly empty) zones — no error.
/// Whitespace-only lines are dropped from the body.
pub fn split_zones(content: &str) -> LetterZones {
    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();

    let recipient_cap = RECIPIENT_LINES.min(total);
    let sender_cap = (RECIPIENT_LINES + SENDER_LINES).min(total);

    // Forward scan for the contiguous subject run, starting after the
    // recipient block.
    let mut scan = recipient_cap;
    while scan < total && !contains_subject(lines[scan]) {
        scan += 1;
    }
    let subject_start = scan;
    while scan < total && contains_subject(lines[scan]) {
        scan += 1;
    }
    let subject_end = scan;
    let found_subject = subject_start < total;

    let (recipient_end, sender_end, body_start) = if found_subject {
        (
            recipient_cap.min(subject_start),
            sender_cap.min(subject_start),
            subject_end.max(sender_cap.min(subject_start)),
        )
    } else {
        (recipient_cap, sender_cap, sender_cap)
    };

    LetterZones {
        recipient: to_owned(&lines[..recipient_end]),
        sender: to_owned(&lines[recipient_end..sender_end]),
        subject: if found_subject {
            to_owned(&lines[subject_start..subject_end])
        } else {
            Vec::new()
        },
        body: lines[body_start..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect(),
    }
}

fn contains_subject(line: &str) -> bool {
    line.to_lowercase().contains(SUBJECT_TOKEN)
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
