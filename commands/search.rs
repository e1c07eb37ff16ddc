use tracing::{debug, warn};

use crate::algorithms::SearchAlgorithm;
use crate::commands::{ArgumentParser, Command, InputError, Reply};
use crate::sequence::Sequence;

/// 查找命令：在当前序列（可能已排序，也可能没有）上查找目标值
pub struct SearchCommand {
    algorithm: SearchAlgorithm,
}

impl SearchCommand {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Command for SearchCommand {
    fn name(&self) -> &'static str {
        match self.algorithm {
            SearchAlgorithm::Binary => "BINARY",
            SearchAlgorithm::Linear => "LINEAR",
        }
    }

    fn menu_key(&self) -> u32 {
        match self.algorithm {
            SearchAlgorithm::Binary => 4,
            SearchAlgorithm::Linear => 5,
        }
    }

    fn description(&self) -> String {
        format!("Search for an element using {}", self.algorithm)
    }

    fn target_prompt(&self) -> Option<String> {
        Some(format!("Enter target element for {}: ", self.algorithm))
    }

    fn execute(&self, sequence: &mut Sequence, args: &[String]) -> Result<Reply, InputError> {
        let target = ArgumentParser::new(args, self.name()).parse_target()?;

        // 前置条件由调用方负责，这里只记录
        if self.algorithm.requires_sorted() && !sequence.is_sorted() {
            warn!("{} on unsorted data, result may be wrong", self.algorithm);
        }

        let result = self.algorithm.search(sequence.as_slice(), target);
        debug!("{} for {} -> {:?}", self.algorithm, target, result);

        Ok(match result {
            Some(index) => Reply::Found {
                algorithm: self.algorithm,
                index,
            },
            None => Reply::NotFound {
                algorithm: self.algorithm,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(value: &str) -> Vec<String> {
        vec![value.to_string()]
    }

    #[test]
    fn test_linear_search_on_initial_data() {
        let cmd = SearchCommand::new(SearchAlgorithm::Linear);
        let mut sequence = Sequence::default();

        let reply = cmd.execute(&mut sequence, &target("13")).unwrap();
        assert_eq!(
            reply,
            Reply::Found {
                algorithm: SearchAlgorithm::Linear,
                index: 2
            }
        );

        let reply = cmd.execute(&mut sequence, &target("99")).unwrap();
        assert_eq!(
            reply,
            Reply::NotFound {
                algorithm: SearchAlgorithm::Linear
            }
        );
    }

    #[test]
    fn test_binary_search_on_sorted_data() {
        let cmd = SearchCommand::new(SearchAlgorithm::Binary);
        let mut sequence = Sequence::new(vec![5, 6, 7, 11, 12, 13]);

        let reply = cmd.execute(&mut sequence, &target("6")).unwrap();
        assert_eq!(
            reply,
            Reply::Found {
                algorithm: SearchAlgorithm::Binary,
                index: 1
            }
        );
        // 查找是只读的
        assert_eq!(sequence.as_slice(), &[5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_search_rejects_bad_target() {
        let cmd = SearchCommand::new(SearchAlgorithm::Binary);
        let mut sequence = Sequence::default();

        let err = cmd.execute(&mut sequence, &target("six")).unwrap_err();
        assert!(matches!(err, InputError::InvalidTarget { .. }));

        let err = cmd.execute(&mut sequence, &[]).unwrap_err();
        assert!(matches!(err, InputError::WrongArgCount { got: 0, .. }));
    }

    #[test]
    fn test_search_command_metadata() {
        let cmd = SearchCommand::new(SearchAlgorithm::Linear);
        assert_eq!(cmd.name(), "LINEAR");
        assert_eq!(cmd.menu_key(), 5);
        assert_eq!(cmd.description(), "Search for an element using Linear Search");
        assert_eq!(
            cmd.target_prompt().as_deref(),
            Some("Enter target element for Linear Search: ")
        );
    }

    #[test]
    fn test_search_empty_sequence() {
        for algorithm in [SearchAlgorithm::Binary, SearchAlgorithm::Linear] {
            let cmd = SearchCommand::new(algorithm);
            let mut sequence = Sequence::new(vec![]);
            let reply = cmd.execute(&mut sequence, &target("1")).unwrap();
            assert_eq!(reply, Reply::NotFound { algorithm });
        }
    }
}
