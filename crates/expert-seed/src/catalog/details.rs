//! Descriptive details per expert.

use super::ProfileDetails;

/// (expert id, job title, specialties, categories)
const DETAILS_TABLE: &[(u32, &str, &[&str], &[&str])] = &[
    (2, "심리상담 전문가", &["심리상담", "인지행동치료", "스트레스 관리"], &["심리상담", "인간관계상담"]),
    (3, "법률상담 전문가", &["법률상담", "계약서 검토", "분쟁 해결"], &["법률상담", "사업상담"]),
    (4, "재무상담 전문가", &["재무상담", "투자상담", "자산관리"], &["재무상담", "투자상담"]),
    (5, "건강상담 전문가", &["건강상담", "영양상담", "운동상담"], &["건강상담", "요리상담"]),
    (6, "진로상담 전문가", &["진로상담", "취업상담", "이직상담"], &["진로상담", "교육상담"]),
    (7, "IT상담 전문가", &["IT상담", "프로그래밍", "소프트웨어 개발"], &["IT상담", "사업상담"]),
    (8, "디자인상담 전문가", &["디자인상담", "UI/UX 디자인", "그래픽 디자인"], &["디자인상담", "IT상담"]),
    (9, "사업상담 전문가", &["사업상담", "창업상담", "경영상담"], &["사업상담", "재무상담"]),
    (10, "언어상담 전문가", &["언어상담", "외국어학습", "번역상담"], &["언어상담", "교육상담"]),
    (11, "음악상담 전문가", &["음악상담", "악기지도", "작곡상담"], &["음악상담", "교육상담"]),
    (12, "여행상담 전문가", &["여행상담", "여행계획", "관광지추천"], &["여행상담", "언어상담"]),
    (13, "미용상담 전문가", &["미용상담", "헤어스타일", "메이크업"], &["미용상담", "스타일링"]),
    (14, "스포츠상담 전문가", &["스포츠상담", "운동법", "체력관리"], &["스포츠상담", "건강상담"]),
    (15, "원예상담 전문가", &["원예상담", "식물재배", "정원가꾸기"], &["원예상담", "건강상담"]),
    (16, "투자상담 전문가", &["투자상담", "주식투자", "부동산투자"], &["투자상담", "재무상담"]),
    (17, "영상상담 전문가", &["영상상담", "영상제작", "편집기법"], &["영상상담", "IT상담"]),
    (18, "쇼핑상담 전문가", &["쇼핑상담", "상품추천", "구매가이드"], &["쇼핑상담", "사업상담"]),
    (19, "요리상담 전문가", &["요리상담", "레시피개발", "식품영양"], &["요리상담", "건강상담"]),
    (20, "반려동물상담 전문가", &["반려동물상담", "펫케어", "훈련지도"], &["반려동물상담", "건강상담"]),
    (21, "부동산상담 전문가", &["부동산상담", "부동산투자", "매매중개"], &["부동산상담", "투자상담"]),
    (22, "학습상담 전문가", &["학습상담", "공부법지도", "시험준비"], &["학습상담", "교육상담"]),
    (23, "육아상담 전문가", &["육아상담", "아이교육", "양육지도"], &["육아상담", "교육상담"]),
    (24, "학교상담 전문가", &["학교상담", "입학지도", "학교생활"], &["학교상담", "교육상담"]),
    (25, "인간관계상담 전문가", &["인간관계상담", "소통기술", "갈등해결"], &["인간관계상담", "심리상담"]),
    (26, "기타상담 전문가", &["기타상담", "다양한분야", "종합상담"], &["기타"]),
    (27, "심리상담 전문가", &["심리상담", "상담치료", "정신건강"], &["심리상담", "인간관계상담"]),
    (28, "법률상담 전문가", &["법률상담", "법무자문", "소송지원"], &["법률상담", "사업상담"]),
    (29, "재무상담 전문가", &["재무상담", "자산관리", "세무자문"], &["재무상담", "투자상담"]),
    (30, "건강상담 전문가", &["건강상담", "헬스케어", "생활습관"], &["건강상담", "요리상담"]),
    (31, "진로상담 전문가", &["진로상담", "커리어코칭", "취업지원"], &["진로상담", "교육상담"]),
];

pub(super) fn builtin() -> impl Iterator<Item = (u32, ProfileDetails)> {
    DETAILS_TABLE.iter().map(|&(id, job_title, specialties, categories)| {
        (
            id,
            ProfileDetails::new(job_title, specialties.iter().copied(), categories.iter().copied()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_expert_has_specialties() {
        for &(id, title, specialties, categories) in DETAILS_TABLE {
            assert!(title.ends_with(" 전문가"), "expert {id}");
            assert!(specialties.len() >= 2, "expert {id}");
            assert!(!categories.is_empty(), "expert {id}");
        }
    }
}
