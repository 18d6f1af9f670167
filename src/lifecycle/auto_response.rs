//! Canned replies sent on a creator's behalf.

use crate::error::{AppError, AppResult};
use crate::models::collaborations::CollaborationType;
use crate::models::creators::Pricing;

/// Response stored when a creator rejects an inquiry without a reason.
pub const DEFAULT_REJECT_MESSAGE: &str = "현재 새로운 협업을 진행하기 어려운 상황입니다.";

/// Formats a KRW amount with thousands separators, e.g. `300,000`.
pub fn format_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn body_for(kind: CollaborationType, price: &str) -> String {
    match kind {
        CollaborationType::Seeding => format!(
            "시딩 문의에 감사드립니다. 현재 저의 시딩 단가는 {price}원이며, 제품 리뷰는 약 2주 이내에 진행됩니다."
        ),
        CollaborationType::Advertisement => format!(
            "광고 문의에 감사드립니다. 현재 저의 광고 단가는 {price}원이며, 컨셉과 일정에 따라 조정될 수 있습니다."
        ),
        CollaborationType::Partnership | CollaborationType::Other => format!(
            "파트너십 문의에 감사드립니다. 장기 협업의 경우 {price}원부터 시작하며, 구체적인 내용은 추가 논의가 필요합니다."
        ),
    }
}

/// Builds the automatic reply for an inquiry of `kind`.
///
/// Fails with a validation error when the creator has no price for that
/// kind, since the reply quotes it.
pub fn compose(
    kind: CollaborationType,
    pricing: &Pricing,
    brand_name: &str,
    creator_display_name: &str,
) -> AppResult<String> {
    let price = pricing.for_type(kind).ok_or_else(|| {
        AppError::Validation(format!("no price configured for {kind:?} inquiries"))
    })?;

    Ok(format!(
        "안녕하세요, {brand_name}님!\n\n{}\n\n자세한 내용은 곧 이메일로 연락드리겠습니다.\n\n감사합니다,\n{creator_display_name} 드림",
        body_for(kind, &format_won(price))
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing() -> Pricing {
        Pricing {
            seeding_price: Some(300_000),
            ad_price: Some(1_500_000),
            collaboration_price: Some(5_000_000),
        }
    }

    #[test]
    fn won_amounts_get_separators() {
        assert_eq!(format_won(0), "0");
        assert_eq!(format_won(999), "999");
        assert_eq!(format_won(1_000), "1,000");
        assert_eq!(format_won(300_000), "300,000");
        assert_eq!(format_won(12_345_678), "12,345,678");
        assert_eq!(format_won(-4_500), "-4,500");
    }

    #[test]
    fn seeding_reply_quotes_seeding_price() {
        let text =
            compose(CollaborationType::Seeding, &pricing(), "테스트브랜드", "김크리").unwrap();
        assert!(text.starts_with("안녕하세요, 테스트브랜드님!\n\n"));
        assert!(text.contains("시딩 단가는 300,000원"));
        assert!(text.ends_with("감사합니다,\n김크리 드림"));
    }

    #[test]
    fn advertisement_reply_quotes_ad_price() {
        let text = compose(CollaborationType::Advertisement, &pricing(), "B", "C").unwrap();
        assert!(text.contains("광고 단가는 1,500,000원"));
    }

    #[test]
    fn other_uses_partnership_wording() {
        let partnership = compose(CollaborationType::Partnership, &pricing(), "B", "C").unwrap();
        let other = compose(CollaborationType::Other, &pricing(), "B", "C").unwrap();
        assert_eq!(partnership, other);
        assert!(other.contains("5,000,000원부터"));
    }

    #[test]
    fn missing_price_is_a_validation_error() {
        let pricing = Pricing {
            ad_price: None,
            ..pricing()
        };
        let err = compose(CollaborationType::Advertisement, &pricing, "B", "C").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
