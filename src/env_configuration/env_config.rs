use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    애플리케이션의 필수 설정값들이 환경변수로 관리되므로, 해당 환경변수가 없으면
    애플리케이션이 정상 동작할 수 없기 때문에 panic으로 즉시 종료시킨다.

    1. 환경변수 `key`에 해당하는 값을 `env::var()`로 조회
    2. 값이 존재하면 해당 값을 문자열로 반환
    3. 값이 없으면:
       - 에러 메시지를 구성하여 error 레벨로 로깅
       - 동일한 메시지로 panic 발생시켜 애플리케이션 종료

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    분석기 설정 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `ANALYZER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 분석기 설정 파일 경로를 지정받는다.
    이 파일에는 데이터 소스 정보, 차트/축/시각화 설정, 실시간 갱신 설정 등
    애플리케이션 실행에 필요한 모든 설정 정보가 포함되어 있다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # 예상 파일 내용
    - 데이터 소스 정보 (URL, 폴링 주기, 버퍼 한도)
    - 차트 설정 (크기, 여백)
    - 축 설정 (틱 포맷, X축 매핑 모드)
    - 시각화 설정 (차트 종류, 색상, 선 두께)
    - 실시간 갱신 설정 (갱신 주기, 갱신 임계치)

    # Panics
    `ANALYZER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static ANALYZER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("ANALYZER_CONFIG_PATH"));

#[doc = r#"
    렌더링된 차트 SVG 문서가 저장될 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_OUTPUT_PATH` 환경변수를 통해 SVG 출력 파일 경로를 지정받는다.
    redraw가 일어날 때마다 해당 경로의 문서가 통째로 다시 씌워진다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # Panics
    `CHART_OUTPUT_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static CHART_OUTPUT_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("CHART_OUTPUT_PATH"));
