use tracing::debug;

use crate::algorithms::SortAlgorithm;
use crate::commands::{ArgumentParser, Command, InputError, Reply};
use crate::sequence::Sequence;

/// 排序命令：用指定算法原地排序整个序列
pub struct SortCommand {
    algorithm: SortAlgorithm,
}

impl SortCommand {
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Command for SortCommand {
    fn name(&self) -> &'static str {
        match self.algorithm {
            SortAlgorithm::Quick => "QUICK",
            SortAlgorithm::Merge => "MERGE",
            SortAlgorithm::Heap => "HEAP",
        }
    }

    fn menu_key(&self) -> u32 {
        match self.algorithm {
            SortAlgorithm::Quick => 1,
            SortAlgorithm::Merge => 2,
            SortAlgorithm::Heap => 3,
        }
    }

    fn description(&self) -> String {
        format!("Sort the array using {}", self.algorithm)
    }

    fn execute(&self, sequence: &mut Sequence, args: &[String]) -> Result<Reply, InputError> {
        ArgumentParser::new(args, self.name()).check_arg_count(0)?;

        debug!("{} on {} elements", self.algorithm, sequence.len());
        self.algorithm.sort(sequence.as_mut_slice());

        Ok(Reply::Sorted {
            algorithm: self.algorithm,
            data: sequence.clone(),
        })
    }
}
