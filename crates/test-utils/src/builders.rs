#![allow(dead_code)]

use std::path::PathBuf;

use dagsched::config::{ConfigFile, GeneratorSection, OutputSection, RawConfigFile, RunSection};
use dagsched::dag::Graph;
use dagsched::types::NodeId;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                generator: GeneratorSection::default(),
                output: OutputSection::default(),
                run: RunSection::default(),
            },
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.generator.seed = Some(seed);
        self
    }

    pub fn max_attempts(mut self, attempts: u64) -> Self {
        self.config.generator.max_attempts = attempts;
        self
    }

    pub fn results_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output.results_file = path.into();
        self
    }

    pub fn save(mut self, save: bool) -> Self {
        self.config.output.save = save;
        self
    }

    pub fn run(mut self, tasks: i64, dependencies: i64) -> Self {
        self.config.run.tasks = Some(tasks);
        self.config.run.dependencies = Some(dependencies);
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for hand-written graphs.
pub struct GraphBuilder {
    nodes: usize,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.edges.push((from, to));
        self
    }

    pub fn edges(mut self, edges: &[(NodeId, NodeId)]) -> Self {
        self.edges.extend_from_slice(edges);
        self
    }

    pub fn build(self) -> Graph {
        Graph::from_edges(self.nodes, self.edges).expect("Failed to build valid graph from builder")
    }
}

/// `0 -> 1 -> .. -> n-1`.
pub fn chain(n: usize) -> Graph {
    let edges = (1..n).map(|i| (i - 1, i));
    Graph::from_edges(n, edges).expect("chain edges are valid")
}
