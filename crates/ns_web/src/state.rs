use ns_core::SummaryPipeline;

pub struct AppState {
    pub pipeline: SummaryPipeline,
}

impl AppState {
    pub fn new(pipeline: SummaryPipeline) -> Self {
        Self { pipeline }
    }
}
