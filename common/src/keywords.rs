//! 分類用キーワード表
//!
//! すべて小文字で定義する（照合側で小文字化したテキストと比較するため）。

// =============================================
// スキャン書類
// =============================================

/// スキャン印（音訳・英語・韓国語・書類フォルダ）
pub const SCAN_MARKERS: &[&str] = &["seukaen", "scan", "스캔", "/docs/", "s0_docs"];

// =============================================
// ファイル名ヒューリスティック
// =============================================

pub const FILENAME_GOLF: &[&str] = &["golf", "골프", "field", "course", "green", "필드", "코스", "그린"];

pub const FILENAME_ARTWALL: &[&str] = &["artwall", "art-wall", "아트월", "벽면", "디스플레이"];

pub const FILENAME_SIMULATOR: &[&str] = &["sita", "시타", "simulator", "시뮬레이터"];

pub const FILENAME_GUIDE: &[&str] = &[
    "guide", "가이드", "consultation", "상담", "fitting", "피팅", "measurement", "측정",
];

pub const SWING: &[&str] = &["swing", "스윙"];

pub const SIGNATURE: &[&str] = &["signature", "사인"];

// =============================================
// ストーリーシーン分類
// =============================================

pub const STORY_GOLF_COURSE: &[&str] = &[
    "골프장", "golf course", "코스", "그린", "green", "페어웨이", "fairway",
];

pub const STORY_SOLO: &[&str] = &["단독", "혼자", "solo", "alone"];

/// 単独ショットを否定する手がかり（単独の明示があれば無視）
pub const STORY_GROUP_HINT: &[&str] = &["여러", "그룹", "group"];

pub const STORY_HAPPY: &[&str] = &[
    "웃", "행복", "밝", "미소", "smile", "happy", "bright", "cheerful", "여유", "평화",
];

pub const STORY_BACKGROUND_CROWD: &[&str] = &["여러", "많은 사람", "multiple people", "배경에 사람"];

pub const STORY_GROUP: &[&str] = &["여러 사람", "여러명", "그룹", "multiple people", "group", "함께"];

pub const STORY_GROUP_VENUE: &[&str] = &["골프장", "golf course", "코스", "course"];

pub const STORY_NEGATIVE: &[&str] = &[
    "어둡", "부정", "문제", "오류", "부상", "러프", "고민", "걱정",
    "dark", "problem", "error", "trouble", "negative", "worried", "injury", "rough",
];

pub const STORY_CONSULTATION: &[&str] = &["상담", "피팅", "가이드", "consultation", "fitting", "guide"];

pub const STORY_CONTACT_POINT: &[&str] = &["전화", "매장", "phone", "store", "스튜디오", "studio"];

pub const STORY_FITTING: &[&str] = &[
    "피팅", "스크린 골프", "fitting", "screen golf", "시뮬레이터", "simulator",
];

pub const STORY_INDOOR: &[&str] = &["매장", "실내", "store", "indoor", "스튜디오", "studio"];

pub const STORY_SOLO_STRICT: &[&str] = &["단독", "solo"];

pub const STORY_CROWD_STRICT: &[&str] = &["여러", "많은", "multiple", "배경에"];

pub const STORY_HAPPY_STRICT: &[&str] = &["웃", "행복", "smile", "happy"];

pub const STORY_PRODUCT: &[&str] = &[
    "제품", "장비", "로고", "product", "equipment", "logo", "masgoo", "massgoo",
];

pub const STORY_CLOSE_UP: &[&str] = &["클로즈업", "가까이", "close-up", "close", "클로즈"];

/// 既定値の信頼度を上げるためのゴルフ関連語
pub const GOLF_RELATED: &[&str] = &[
    "golf", "골프", "그린", "green", "페어웨이", "fairway", "코스", "course",
    "필드", "벙커", "bunker", "잔디", "퍼팅", "putting", "드라이버", "driver",
];

// =============================================
// 旧キーワード分類
// =============================================

pub const LEGACY_DOCUMENT: &[&str] = &[
    "문서", "주문서", "설문", "동의서", "양식", "서류", "신청서", "scan", "document",
];

pub const LEGACY_ARTWALL: &[&str] = &["아트월", "artwall", "벽면", "디스플레이", "display", "wall"];

pub const LEGACY_SIMULATOR: &[&str] = &["시타", "시뮬레이터", "simulator", "sita", "스크린", "screen"];

pub const LEGACY_GUIDE: &[&str] = &[
    "상담", "가이드", "피팅", "측정", "guide", "consultation", "fitting", "measurement",
];

pub const LEGACY_GOLF: &[&str] = &[
    "골프장", "그린", "페어웨이", "벙커", "러프", "golf course", "green", "fairway", "야외", "잔디",
];
