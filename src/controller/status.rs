//! Status messages cycled while a track is loading.

use std::time::Duration;

/// How long each status message stays on screen.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(2);

pub const TEXT_STATUS_MESSAGES: [&str; 4] = [
    "Gemini가 별의 이야기를 읽어오고 있습니다...",
    "신화와 전설을 찾아보는 중...",
    "가장 관측하기 좋은 시기를 계산하는 중...",
    "밤하늘 지도를 펼치는 중...",
];

pub const IMAGE_STATUS_MESSAGES: [&str; 3] = [
    "별빛을 모아 이미지를 그리는 중...",
    "망원경의 초점을 맞추는 중...",
    "우주 사진을 현상하는 중...",
];
