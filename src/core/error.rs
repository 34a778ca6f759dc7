use super::types::PatchId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("incomplete border at row {row}, column {col}")]
    IncompleteBorder { row: usize, col: usize },

    #[error("diagonal border at row {row}, column {col}")]
    DiagonalBorder { row: usize, col: usize },

    #[error("circular containment between patches {}", join_ids(.cycle))]
    CircularContainment { cycle: Vec<PatchId> },

    #[error("bounding box requested for an empty cell set")]
    EmptySet,
}

fn join_ids(ids: &[PatchId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" -> ")
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_patches() {
        let err = ChartError::CircularContainment { cycle: vec![1, 2, 1] };
        assert_eq!(err.to_string(), "circular containment between patches 1 -> 2 -> 1");
    }

    #[test]
    fn border_message_has_location() {
        let err = ChartError::IncompleteBorder { row: 3, col: 2 };
        assert_eq!(err.to_string(), "incomplete border at row 3, column 2");
    }
}
