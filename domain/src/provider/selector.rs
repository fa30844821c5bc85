//! Provider selection policy

use super::kind::ProviderKind;

/// Choose the provider for a query.
///
/// A search-native credential wins; otherwise tool-calling is used when it is
/// available; the direct answer is the fallback. Pure and deterministic.
pub fn select(has_tool_calling_credential: bool, has_search_native_credential: bool) -> ProviderKind {
    if has_search_native_credential {
        ProviderKind::SearchNative
    } else if has_tool_calling_credential {
        ProviderKind::ToolCalling
    } else {
        ProviderKind::DirectAnswer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_native_credential_takes_priority() {
        assert_eq!(select(false, true), ProviderKind::SearchNative);
        assert_eq!(select(true, true), ProviderKind::SearchNative);
    }

    #[test]
    fn tool_calling_when_no_search_native_credential() {
        assert_eq!(select(true, false), ProviderKind::ToolCalling);
    }

    #[test]
    fn falls_back_to_direct_answer() {
        assert_eq!(select(false, false), ProviderKind::DirectAnswer);
    }

    #[test]
    fn selection_is_deterministic() {
        for inputs in [(true, false), (false, true), (false, false)] {
            let first = select(inputs.0, inputs.1);
            for _ in 0..100 {
                assert_eq!(select(inputs.0, inputs.1), first);
            }
        }
    }
}
