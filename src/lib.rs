//! jlpt-reader library root.
//! JLPT 레벨별 일본어 읽기 지문 생성기의 계층(domain/application/infrastructure/interface)을 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::composition::AppComposition;

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
