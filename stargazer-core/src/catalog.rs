//! The static month-by-month calendar.
//!
//! The table is built once on first access and shared read-only for the
//! lifetime of the process.

use std::sync::LazyLock;

use crate::models::{CatalogEntry, MonthEntry, ObjectCategory, Season};

static CALENDAR: LazyLock<Vec<MonthEntry>> = LazyLock::new(build_calendar);

/// All twelve months in calendar order.
pub fn calendar() -> &'static [MonthEntry] {
    &CALENDAR
}

/// Look up a month by number (1-12).
pub fn month(number: u32) -> Option<&'static MonthEntry> {
    CALENDAR.iter().find(|m| m.month == number)
}

/// Look up an entry by its stable id.
pub fn entry(id: &str) -> Option<&'static CatalogEntry> {
    CALENDAR
        .iter()
        .flat_map(|m| m.objects.iter())
        .find(|e| e.id == id)
}

fn object(
    id: &str,
    name: &str,
    category: ObjectCategory,
    description: &str,
    image_seed: u32,
) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        image_placeholder: format!("https://picsum.photos/400/{}?grayscale", image_seed),
    }
}

fn month_entry(month: u32, season: Season, objects: Vec<CatalogEntry>) -> MonthEntry {
    MonthEntry {
        month,
        label: format!("{}월", month),
        season,
        objects,
    }
}

fn build_calendar() -> Vec<MonthEntry> {
    use ObjectCategory::*;

    vec![
        month_entry(1, Season::Winter, vec![
            object("orion", "오리온자리", Constellation, "겨울철 밤하늘의 왕, 베텔게우스와 리겔이 빛나는 별자리", 300),
            object("taurus", "황소자리", Constellation, "붉은 별 알데바란과 플레이아데스 성단을 품은 별자리", 301),
        ]),
        month_entry(2, Season::Winter, vec![
            object("gemini", "쌍둥이자리", Constellation, "카스토르와 폴룩스, 두 형제의 우애가 빛나는 별자리", 302),
            object("canis_major", "큰개자리", Constellation, "밤하늘에서 가장 밝은 별 시리우스가 있는 별자리", 303),
        ]),
        month_entry(3, Season::Spring, vec![
            object("cancer", "게자리", Constellation, "희미하지만 프레세페 성단을 품고 있는 봄의 전령", 304),
            object("leo", "사자자리", Constellation, "봄철 밤하늘의 제왕, 레굴루스가 빛나는 별자리", 305),
        ]),
        month_entry(4, Season::Spring, vec![
            object("virgo", "처녀자리", Constellation, "봄의 대곡선을 이루는 스피카가 있는 거대한 별자리", 306),
            object("ursa_major", "북두칠성(큰곰)", Constellation, "북쪽 하늘의 길잡이, 1년 내내 볼 수 있는 별자리", 307),
        ]),
        month_entry(5, Season::Spring, vec![
            object("bootes", "목동자리", Constellation, "주황색 거성 아크투루스가 밝게 빛나는 별자리", 308),
            object("coma_berenices", "머리털자리", Constellation, "수많은 은하들이 모여 있는 은하단의 고향", 309),
        ]),
        month_entry(6, Season::Summer, vec![
            object("hercules", "헤라클레스자리", Constellation, "M13 구상성단이 숨어 있는 영웅의 별자리", 310),
            object("libra", "천칭자리", Constellation, "황도 12궁 중 하나로 정의를 상징하는 별자리", 311),
        ]),
        month_entry(7, Season::Summer, vec![
            object("scorpius", "전갈자리", Constellation, "여름철 남쪽 하늘의 S라인, 붉은 심장 안타레스", 312),
            object("ophiuchus", "땅꾼자리", Constellation, "전갈을 밟고 뱀을 쥐고 있는 의술의 신", 313),
        ]),
        month_entry(8, Season::Summer, vec![
            object("cygnus", "백조자리", Constellation, "은하수 위를 나는 백조, 데네브와 알비레오", 314),
            object("lyra", "거문고자리", Constellation, "여름의 대삼각형을 이루는 직녀성 베가가 있는 곳", 315),
        ]),
        month_entry(9, Season::Autumn, vec![
            object("pegasus", "페가수스자리", Constellation, "가을의 대사각형을 이루는 천마의 별자리", 316),
            object("aquarius", "물병자리", Constellation, "가을 밤하늘의 넓은 영역을 차지하는 별자리", 317),
        ]),
        month_entry(10, Season::Autumn, vec![
            object("andromeda", "안드로메다자리", Constellation, "우리 은하의 이웃, 안드로메다 은하를 볼 수 있는 곳", 318),
            object("cassiopeia", "카시오페이아", Constellation, "W자 모양으로 북극성을 찾는 길잡이", 319),
        ]),
        month_entry(11, Season::Autumn, vec![
            object("pisces", "물고기자리", Constellation, "두 마리 물고기가 끈으로 묶인 모습의 별자리", 320),
            object("perseus", "페르세우스자리", Constellation, "이중성단과 변광성 알골이 유명한 영웅의 별자리", 321),
        ]),
        month_entry(12, Season::Winter, vec![
            object("auriga", "마차부자리", Constellation, "오각형 모양과 밝은 별 카펠라가 특징", 322),
            object("pleiades", "플레이아데스", Cluster, "맨눈으로도 볼 수 있는 아름다운 산개성단 (좀생이별)", 323),
        ]),
    ]
}
