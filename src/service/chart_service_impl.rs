use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::dto::data_point::*;

use crate::enums::x_axis_mode::*;

use crate::model::configs::{axis_config::*, chart_config::*, chart_margin::*, visual_config::*};

use crate::utils_modules::time_utils::*;

use plotters::prelude::*;

/* basis 스플라인을 세그먼트당 몇 개의 표본으로 펼칠지 */
const CURVE_SAMPLES_PER_SEGMENT: usize = 8;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
    axis_config: AxisConfig,
    visual_config: VisualConfig,
    data_limit: usize,
}

impl ChartServiceImpl {
    #[doc = r#"
        버퍼 전체를 하나의 경로로 그리는 동기 렌더링 함수.

        1. 고정 도메인의 좌표계를 구성한다 (X: `[0, data_limit]`, Y: `[0, 100]`)
        2. X축 매핑 모드에 따라 버퍼 index 또는 timestamp 기준으로 좌표를 계산
           - index 모드: 첫 포인트가 오른쪽 끝(`data_limit`)에 오고 왼쪽으로 내려간다
           - timestamp 모드: 왼쪽에서 오른쪽으로 시간순 배치, 틱 라벨은 포인트 timestamp
        3. basis 스플라인으로 곡선을 부드럽게 만든 뒤 단일 라인 시리즈로 그린다
        4. Y 도메인을 벗어난 값은 clamp하지 않고 그대로 좌표 변환한다

        # Arguments
        * `data_points` - 현재 버퍼에 들어있는 데이터 포인트들
        * `output_path_str` - SVG 문서를 저장할 경로
    "#]
    fn draw_line_chart(
        &self,
        data_points: &[DataPoint],
        output_path_str: &str,
    ) -> anyhow::Result<()> {
        let margin: &ChartMargin = &self.chart_config.chart_margin;

        let root = SVGBackend::new(
            output_path_str,
            (self.chart_config.chart_width, self.chart_config.chart_height),
        )
        .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top(margin.top)
            .margin_right(margin.right)
            .x_label_area_size(margin.bottom)
            .y_label_area_size(margin.left)
            .build_cartesian_2d(0f64..self.data_limit as f64, 0f64..100f64)?;

        let x_axis_mode: XAxisMode = self.axis_config.x_axis_mode;
        let y_precision: Option<usize> = parse_tick_precision(&self.axis_config.y_axis_tick_format);

        /* timestamp 모드에서 틱 라벨로 쓸 포인트별 시각 문자열 */
        let x_tick_labels: Vec<String> = data_points
            .iter()
            .map(|p| format_epoch_tick(p.timestamp, &self.axis_config.x_axis_tick_format))
            .collect();

        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_label_formatter(&|x: &f64| match x_axis_mode {
                XAxisMode::Index => format!("{:.0}", x),
                XAxisMode::Timestamp => {
                    let idx: usize = x.round() as usize;
                    x_tick_labels.get(idx).cloned().unwrap_or_default()
                }
            })
            .y_label_formatter(&|y: &f64| match y_precision {
                Some(precision) => format!("{:.*}", precision, y),
                None => y.to_string(),
            })
            .draw()?;

        let raw_points: Vec<(f64, f64)> = match x_axis_mode {
            XAxisMode::Index => data_points
                .iter()
                .enumerate()
                .map(|(i, p)| (self.data_limit as f64 - i as f64, p.value))
                .collect(),
            XAxisMode::Timestamp => data_points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.value))
                .collect(),
        };

        let curve_points: Vec<(f64, f64)> =
            smooth_basis(&raw_points, CURVE_SAMPLES_PER_SEGMENT);

        chart.draw_series(LineSeries::new(curve_points, self.series_style()))?;

        root.present()?;

        Ok(())
    }

    #[doc = "설정된 색상 스킴의 첫 번째 색과 선 두께로 시리즈 스타일을 만들어주는 함수"]
    fn series_style(&self) -> ShapeStyle {
        let color: RGBColor = self
            .visual_config
            .viz_color_scheme
            .first()
            .map(|name| resolve_color_name(name))
            .unwrap_or(BLUE);

        ShapeStyle::from(&color).stroke_width(self.visual_config.viz_stroke_width)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_line_chart(
        &self,
        data_points: &[DataPoint],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let service: ChartServiceImpl = self.clone();
        let data: Vec<DataPoint> = data_points.to_vec();
        let output_path_str: String = output_path.to_string_lossy().to_string();

        /* plotters는 동기 API 이므로 blocking task 에서 렌더링 */
        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || service.draw_line_chart(&data, &output_path_str));

        handle.await??;

        Ok(())
    }
}

#[doc = "색상 이름 문자열을 plotters 색상으로 변환해주는 함수. 모르는 이름은 blue로 처리한다."]
fn resolve_color_name(name: &str) -> RGBColor {
    match name.to_ascii_lowercase().as_str() {
        "blue" => BLUE,
        "red" => RED,
        "green" => GREEN,
        "black" => BLACK,
        "white" => WHITE,
        "yellow" => YELLOW,
        "cyan" => CYAN,
        "magenta" => MAGENTA,
        _ => BLUE,
    }
}

#[doc = r#"
    d3 스타일 숫자 포맷 문자열에서 소수점 자릿수를 뽑아주는 함수.

    `.2f` 처럼 `.<자릿수>f` 형태만 지원하며, 그 외 형태는 None을 돌려줘서
    호출 쪽이 기본 표기로 넘어가게 한다.
"#]
fn parse_tick_precision(tick_format: &str) -> Option<usize> {
    tick_format
        .strip_prefix('.')?
        .strip_suffix('f')?
        .parse::<usize>()
        .ok()
}

#[doc = r#"
    제어점 목록을 uniform cubic basis 스플라인으로 펼쳐주는 함수.

    양 끝 제어점을 두 번씩 복제해서(clamped) 곡선이 실제 첫/마지막 포인트에서
    시작하고 끝나도록 한다. 제어점이 3개 미만이면 꺾은선 그대로 돌려준다.

    # Arguments
    * `points` - 제어점 목록 (차트 좌표계)
    * `samples_per_segment` - 세그먼트당 표본 개수

    # Returns
    * `Vec<(f64, f64)>` - 표본화된 곡선 좌표들
"#]
fn smooth_basis(points: &[(f64, f64)], samples_per_segment: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let first: (f64, f64) = points[0];
    let last: (f64, f64) = points[points.len() - 1];

    let mut control: Vec<(f64, f64)> = Vec::with_capacity(points.len() + 4);
    control.push(first);
    control.push(first);
    control.extend_from_slice(points);
    control.push(last);
    control.push(last);

    let mut curve: Vec<(f64, f64)> = Vec::new();

    for window in control.windows(4) {
        for step in 0..samples_per_segment {
            let t: f64 = step as f64 / samples_per_segment as f64;
            curve.push(basis_point(window[0], window[1], window[2], window[3], t));
        }
    }

    /* 마지막 세그먼트의 t=1 표본을 더해 곡선을 마지막 포인트에서 닫는다 */
    let tail: usize = control.len() - 4;
    curve.push(basis_point(
        control[tail],
        control[tail + 1],
        control[tail + 2],
        control[tail + 3],
        1.0,
    ));

    curve
}

fn basis_point(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let t2: f64 = t * t;
    let t3: f64 = t2 * t;

    let b0: f64 = (1.0 - t).powi(3) / 6.0;
    let b1: f64 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
    let b2: f64 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
    let b3: f64 = t3 / 6.0;

    (
        b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
        b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::viz_type::*;

    fn chart_config() -> ChartConfig {
        ChartConfig {
            chart_width: 800,
            chart_height: 400,
            chart_margin: ChartMargin {
                top: 20,
                right: 20,
                bottom: 30,
                left: 40,
            },
        }
    }

    fn axis_config(mode: XAxisMode) -> AxisConfig {
        AxisConfig {
            x_axis_tick_format: "%H:%M:%S".to_string(),
            y_axis_tick_format: ".2f".to_string(),
            x_axis_mode: mode,
        }
    }

    fn visual_config() -> VisualConfig {
        VisualConfig {
            viz_type: VizType::LineChart,
            viz_color_scheme: vec![
                "blue".to_string(),
                "red".to_string(),
                "green".to_string(),
            ],
            viz_stroke_width: 2,
        }
    }

    #[test]
    fn tick_precision_parses_d3_float_format() {
        assert_eq!(parse_tick_precision(".2f"), Some(2));
        assert_eq!(parse_tick_precision(".0f"), Some(0));
        assert_eq!(parse_tick_precision("d"), None);
        assert_eq!(parse_tick_precision(".2e"), None);
    }

    #[test]
    fn unknown_color_names_fall_back_to_blue() {
        assert_eq!(resolve_color_name("red"), RED);
        assert_eq!(resolve_color_name("GREEN"), GREEN);
        assert_eq!(resolve_color_name("turquoise"), BLUE);
    }

    #[test]
    fn basis_curve_is_clamped_to_endpoints() {
        let points: Vec<(f64, f64)> = vec![(0.0, 10.0), (1.0, 50.0), (2.0, 20.0), (3.0, 80.0)];

        let curve: Vec<(f64, f64)> = smooth_basis(&points, 8);

        let first = curve.first().unwrap();
        let last = curve.last().unwrap();
        assert!((first.0 - 0.0).abs() < 1e-9 && (first.1 - 10.0).abs() < 1e-9);
        assert!((last.0 - 3.0).abs() < 1e-9 && (last.1 - 80.0).abs() < 1e-9);
        assert!(curve.len() > points.len());
    }

    #[test]
    fn basis_curve_stays_inside_control_hull() {
        let points: Vec<(f64, f64)> = vec![(0.0, 0.0), (1.0, 100.0), (2.0, 0.0), (3.0, 100.0)];

        let curve: Vec<(f64, f64)> = smooth_basis(&points, 16);

        for (x, y) in curve {
            assert!((0.0..=3.0).contains(&x));
            assert!((0.0..=100.0).contains(&y));
        }
    }

    #[test]
    fn short_polylines_are_returned_unsmoothed() {
        let points: Vec<(f64, f64)> = vec![(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(smooth_basis(&points, 8), points);
    }

    #[tokio::test]
    async fn render_line_chart_writes_svg_document() {
        let service: ChartServiceImpl = ChartServiceImpl::new(
            chart_config(),
            axis_config(XAxisMode::Index),
            visual_config(),
            100,
        );

        let data_points: Vec<DataPoint> = (0..20)
            .map(|i| DataPoint::new(1_700_000_000_000 + i * 1_000, (i % 10) as f64 * 10.0))
            .collect();

        let output_path: PathBuf = env::temp_dir()
            .join("realtime_viz_analyzer_test")
            .join("chart_index_mode.svg");

        service
            .render_line_chart(&data_points, &output_path)
            .await
            .unwrap();

        let svg_document: String = std::fs::read_to_string(&output_path).unwrap();
        assert!(svg_document.contains("<svg"));
        assert!(svg_document.contains("polyline") || svg_document.contains("path"));
    }

    #[tokio::test]
    async fn render_line_chart_supports_timestamp_mode() {
        let service: ChartServiceImpl = ChartServiceImpl::new(
            chart_config(),
            axis_config(XAxisMode::Timestamp),
            visual_config(),
            100,
        );

        let data_points: Vec<DataPoint> = (0..5)
            .map(|i| DataPoint::new(1_700_000_000_000 + i * 60_000, 50.0))
            .collect();

        let output_path: PathBuf = env::temp_dir()
            .join("realtime_viz_analyzer_test")
            .join("chart_timestamp_mode.svg");

        service
            .render_line_chart(&data_points, &output_path)
            .await
            .unwrap();

        assert!(std::fs::read_to_string(&output_path)
            .unwrap()
            .contains("<svg"));
    }
}
