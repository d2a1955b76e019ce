use crate::constants::{DIRECTORY_ALIAS_PREFIX, MIDDLEWARE_ALIAS_PREFIX, ROUTE_ALIAS_PREFIX};

/// Monotonic alias counters for one traversal, one per namespace.
#[derive(Debug, Default)]
pub struct AliasCounter {
    directories: usize,
    middleware: usize,
    routes: usize,
}

impl AliasCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_directory(&mut self) -> String {
        next(DIRECTORY_ALIAS_PREFIX, &mut self.directories)
    }

    pub fn next_middleware(&mut self) -> String {
        next(MIDDLEWARE_ALIAS_PREFIX, &mut self.middleware)
    }

    pub fn next_route(&mut self) -> String {
        next(ROUTE_ALIAS_PREFIX, &mut self.routes)
    }
}

fn next(prefix: &str, counter: &mut usize) -> String {
    let alias = format!("{}{}", prefix, counter);
    *counter += 1;
    alias
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_are_independent() {
        let mut aliases = AliasCounter::new();
        assert_eq!(aliases.next_route(), "r0");
        assert_eq!(aliases.next_route(), "r1");
        assert_eq!(aliases.next_middleware(), "m0");
        assert_eq!(aliases.next_directory(), "d0");
        assert_eq!(aliases.next_route(), "r2");
        assert_eq!(aliases.next_directory(), "d1");
    }
}
