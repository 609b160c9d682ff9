use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    분석기 설정 파일(`ANALYZER_CONFIG_PATH`)을 TOML 형식으로 관리하며,
    이 함수를 통해 타입 안전하게 구조체로 변환한다.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct SampleConfig {
        data_source: String,
        data_limit: usize,
    }

    #[test]
    fn read_toml_from_file_parses_config_struct() {
        let config_path: PathBuf =
            env::temp_dir().join("realtime_viz_analyzer_io_utils_test.toml");
        std::fs::write(
            &config_path,
            "data_source = \"https://api.example.com/data\"\ndata_limit = 100\n",
        )
        .unwrap();

        let config: SampleConfig =
            read_toml_from_file(config_path.to_str().unwrap()).unwrap();

        assert_eq!(config.data_source, "https://api.example.com/data");
        assert_eq!(config.data_limit, 100);
    }

    #[test]
    fn read_toml_from_file_fails_on_missing_file() {
        let result: Result<SampleConfig, anyhow::Error> =
            read_toml_from_file("no_such_config_file.toml");

        assert!(result.is_err());
    }
}
