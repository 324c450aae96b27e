use ladder_core::word::NeighborStrategy;

/// Parse neighbor strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<NeighborStrategy, String> {
    s.parse::<NeighborStrategy>().map_err(|e| e.to_string())
}
