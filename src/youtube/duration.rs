use crate::error::{Error, Result};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Decode an ISO-8601 style duration token ("PT1H2M3S") into seconds.
///
/// The two designator characters are skipped without interpretation; the
/// remainder is scanned for the H, M and S components in that fixed order.
/// Every component is optional, so a bare "PT" is a zero-length clip, but
/// any input left over after the scan is rejected.
pub fn parse_duration(token: &str) -> Result<u64> {
    let Some(mut rest) = token.get(2..) else {
        return Err(Error::format(token, "missing duration designator"));
    };

    let mut total: u64 = 0;
    for (letter, unit_secs) in [('H', SECS_PER_HOUR), ('M', SECS_PER_MINUTE), ('S', 1)] {
        let Some(at) = rest.find(letter) else {
            continue;
        };
        let digits = &rest[..at];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::format(
                token,
                format!("expected digits before '{letter}', found {digits:?}"),
            ));
        }
        total = digits
            .parse::<u64>()
            .ok()
            .and_then(|value| value.checked_mul(unit_secs))
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| Error::format(token, "duration overflows 64 bits"))?;
        rest = &rest[at + 1..];
    }

    if !rest.is_empty() {
        return Err(Error::format(
            token,
            format!("unexpected trailing input {rest:?}"),
        ));
    }

    Ok(total)
}

/// Format seconds for display.
///
/// Tiered and lossy on purpose: once days are non-zero the seconds drop out,
/// once hours are non-zero the output stops at minutes.
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let mins = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = total_secs % SECS_PER_MINUTE;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, mins)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m {}s", mins, secs)
    }
}
