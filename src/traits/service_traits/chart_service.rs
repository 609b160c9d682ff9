use crate::common::*;

use crate::dto::data_point::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the whole data buffer as a single-path line chart and save it as an SVG document
        # Arguments
        * `data_points` - Data points currently held in the buffer
        * `output_path` - Path where the chart SVG document will be saved
    "]
    async fn render_line_chart(
        &self,
        data_points: &[DataPoint],
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
