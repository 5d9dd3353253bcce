use std::time::Instant;

use tracing::{debug, info};

use crate::document::{DocumentBuilder, DocumentNode};
use crate::errors::GenerationError;
use crate::generators::{CrewSynthesizer, StarshipSynthesizer, Synthesizer};
use crate::model::{GenerateOptions, GenerationReport, GenerationRequest, Roster};
use crate::output::write_document_xml;
use crate::random::{ChaChaSource, RandomSource};

/// Entry point for generating roster documents.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run with a ChaCha source seeded from the options, or from entropy.
    pub fn run(&self, request: &GenerationRequest) -> Result<GenerationReport, GenerationError> {
        let mut rng = match self.options.seed {
            Some(seed) => ChaChaSource::from_seed(seed),
            None => ChaChaSource::from_entropy(),
        };
        info!(seed = rng.seed(), "random source seeded");
        let mut report = self.run_with(request, &mut rng)?;
        report.seed = Some(rng.seed());
        Ok(report)
    }

    /// Run with a caller-provided random source.
    pub fn run_with(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<GenerationReport, GenerationError> {
        if request.output_path.as_os_str().is_empty() {
            return Err(GenerationError::InvalidRequest(
                "output path is empty".to_string(),
            ));
        }

        let start = Instant::now();
        let kind = request.roster.kind();
        info!(
            root = kind.root_tag(),
            entities = request.roster.len(),
            path = %request.output_path.display(),
            "generation started"
        );

        let document = build_document(request, rng)?;
        let entities = document.children().len() as u64;
        let bytes_written = write_document_xml(&request.output_path, &document)?;

        let report = GenerationReport {
            kind,
            output_path: request.output_path.clone(),
            entities,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
            seed: None,
        };

        info!(
            root = kind.root_tag(),
            entities = report.entities,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            path = %report.output_path.display(),
            "generation completed"
        );
        Ok(report)
    }
}

/// Synthesize every entity of the request into a document tree.
pub fn build_document(
    request: &GenerationRequest,
    rng: &mut dyn RandomSource,
) -> Result<DocumentNode, GenerationError> {
    let mut builder = DocumentBuilder::new(request.roster.kind());

    match &request.roster {
        Roster::Crew(crew) => {
            let synthesizer = CrewSynthesizer::new(&crew.catalogs);
            append_batch(&mut builder, &synthesizer, crew.count, rng)?;
        }
        Roster::Fleet(factions) => {
            for faction in factions {
                debug!(faction = %faction.label, ships = faction.count, "generating faction");
                let synthesizer = StarshipSynthesizer::new(faction);
                append_batch(&mut builder, &synthesizer, faction.count, rng)?;
            }
        }
    }

    Ok(builder.finish())
}

fn append_batch(
    builder: &mut DocumentBuilder,
    synthesizer: &dyn Synthesizer,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<(), GenerationError> {
    for _ in 0..count {
        builder.append(synthesizer.synthesize(rng))?;
    }
    Ok(())
}
