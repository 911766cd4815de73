// webcount-core/src/sum.rs
// Decodes the single-argument form of the sum utility.
use serde::Deserialize;
use webcount_common::error::{Result, WebCountError};
use webcount_common::model::SumOperands;

#[derive(Deserialize)]
#[serde(untagged)]
enum SumFragment {
    Pair(SumOperands),
    Wrapped { data: SumOperands },
}

/// Accepts `[a, b]`, `{"data": [a, b]}`, or the bare legacy fragment
/// `{"data": a,b}`.
pub fn parse_sum_fragment(arg: &str) -> Result<SumOperands> {
    let trimmed = arg.trim();
    if let Ok(fragment) = serde_json::from_str::<SumFragment>(trimmed) {
        let operands = match fragment {
            SumFragment::Pair(ops) | SumFragment::Wrapped { data: ops } => ops,
        };
        tracing::debug!("Decoded sum operands {:?} from JSON", operands);
        return Ok(operands);
    }

    let list = legacy_data_list(trimmed).ok_or_else(|| {
        WebCountError::ParseError(
            "sum fragment",
            format!("expected [a, b] or {{\"data\": a,b}}, got {trimmed:?}"),
        )
    })?;
    let operands: SumOperands = serde_json::from_str(&format!("[{list}]"))
        .map_err(|e| WebCountError::ParseError("sum fragment", e.to_string()))?;
    tracing::debug!("Decoded sum operands {:?} from legacy fragment", operands);
    Ok(operands)
}

/// Returns the `a,b` in `{"data": a,b}`.
fn legacy_data_list(fragment: &str) -> Option<&str> {
    let inner = fragment.strip_prefix('{')?.strip_suffix('}')?;
    let (key, list) = inner.split_once(':')?;
    (key.trim() == "\"data\"").then_some(list.trim())
}
