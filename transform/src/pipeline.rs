//! The transform-pipeline seam.
//!
//! The host composes schema transforms into an ordered pipeline; the
//! rewrite engine is one stage of it. Request and result delegation are
//! the host's concern and have no representation here.

use crate::error::TransformResult;
use emend_schema::Schema;

/// A single schema-transform stage.
pub trait SchemaTransform {
    /// Transform a schema, producing the input of the next stage.
    fn transform_schema(&self, schema: Schema) -> TransformResult<Schema>;
}

/// An ordered pipeline of schema-transform stages.
#[derive(Default)]
pub struct TransformPipeline {
    stages: Vec<Box<dyn SchemaTransform>>,
}

impl TransformPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn stage(mut self, stage: impl SchemaTransform + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// The number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipeline holds no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the schema through every stage, in order.
    pub fn run(&self, schema: Schema) -> TransformResult<Schema> {
        let mut schema = schema;
        for stage in &self.stages {
            schema = stage.transform_schema(schema)?;
        }
        Ok(schema)
    }
}

impl SchemaTransform for TransformPipeline {
    fn transform_schema(&self, schema: Schema) -> TransformResult<Schema> {
        self.run(schema)
    }
}
