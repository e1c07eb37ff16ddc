use std::collections::{BTreeMap, HashMap};

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};

use super::{exit::ExitCommand, search::SearchCommand, sort::SortCommand, CommandType};

/// 命令注册表，按菜单编号管理所有可用的命令
pub struct CommandRegistry {
    commands: BTreeMap<u32, CommandType>,
    names: HashMap<String, u32>,
}

impl CommandRegistry {
    /// 创建注册表并注册全部菜单命令
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
            names: HashMap::new(),
        };

        // 排序命令
        registry.register(CommandType::Sort(SortCommand::new(SortAlgorithm::Quick)));
        registry.register(CommandType::Sort(SortCommand::new(SortAlgorithm::Merge)));
        registry.register(CommandType::Sort(SortCommand::new(SortAlgorithm::Heap)));

        // 查找命令
        registry.register(CommandType::Search(SearchCommand::new(SearchAlgorithm::Binary)));
        registry.register(CommandType::Search(SearchCommand::new(SearchAlgorithm::Linear)));

        registry.register(CommandType::Exit(ExitCommand));

        registry
    }

    /// 注册一个命令，编号或名称重复时覆盖旧命令
    pub fn register(&mut self, command: CommandType) {
        let key = command.menu_key();
        self.names.insert(command.name().to_uppercase(), key);
        self.commands.insert(key, command);
    }

    /// 按菜单编号或命令名（大小写不敏感）查找命令
    pub fn lookup(&self, token: &str) -> Option<&CommandType> {
        let token = token.trim();
        let key = match token.parse::<u32>() {
            Ok(key) => key,
            Err(_) => *self.names.get(&token.to_uppercase())?,
        };
        self.commands.get(&key)
    }

    /// 按菜单顺序遍历命令
    pub fn entries(&self) -> impl Iterator<Item = &CommandType> {
        self.commands.values()
    }

    /// 获取所有注册的命令名称（菜单顺序）
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.values().map(|cmd| cmd.name()).collect()
    }

    /// 检查命令是否存在
    pub fn has_command(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Reply;
    use crate::sequence::Sequence;

    #[test]
    fn test_command_registry_basic() {
        let registry = CommandRegistry::new();

        assert!(registry.has_command("1"));
        assert!(registry.has_command("6"));
        assert!(registry.has_command("QUICK"));
        assert!(registry.has_command("binary")); // 大小写不敏感
        assert!(registry.has_command(" 4 \n"));

        assert!(!registry.has_command("0"));
        assert!(!registry.has_command("7"));
        assert!(!registry.has_command("-1"));
        assert!(!registry.has_command("UNKNOWN"));
        assert!(!registry.has_command(""));
    }

    #[test]
    fn test_menu_order() {
        let registry = CommandRegistry::new();
        let keys: Vec<u32> = registry.entries().map(|cmd| cmd.menu_key()).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            registry.command_names(),
            vec!["QUICK", "MERGE", "HEAP", "BINARY", "LINEAR", "EXIT"]
        );
    }

    #[test]
    fn test_lookup_by_number_and_name_agree() {
        let registry = CommandRegistry::new();
        for (number, name) in [("1", "quick"), ("3", "Heap"), ("5", "LINEAR")] {
            let by_number = registry.lookup(number).unwrap();
            let by_name = registry.lookup(name).unwrap();
            assert_eq!(by_number.menu_key(), by_name.menu_key());
        }
    }

    #[test]
    fn test_command_registry_execute() {
        let registry = CommandRegistry::new();
        let mut sequence = Sequence::default();

        let reply = registry
            .lookup("2")
            .unwrap()
            .execute(&mut sequence, &[])
            .unwrap();
        assert!(matches!(reply, Reply::Sorted { .. }));

        let reply = registry
            .lookup("4")
            .unwrap()
            .execute(&mut sequence, &["12".to_string()])
            .unwrap();
        assert!(matches!(reply, Reply::Found { index: 4, .. }));

        let reply = registry
            .lookup("exit")
            .unwrap()
            .execute(&mut sequence, &[])
            .unwrap();
        assert!(reply.is_exit());
    }
}
