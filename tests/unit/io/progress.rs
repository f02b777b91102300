//! Tests for progress tracking across maze batches

#[cfg(test)]
mod tests {
    use mazecarver::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use mazecarver::io::progress::ProgressManager;

    // Tests a single maze moves through its whole lifecycle
    // Verified by indexing bars past the created range
    #[test]
    fn test_single_maze_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        assert_eq!(pm.maze_count(), 1);

        pm.start_maze(0, "maze_42", 900);
        for visited in [1, 10, 450, 900] {
            pm.update_visited(0, visited);
        }
        pm.complete_maze(0);
        pm.finish();
    }

    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        assert_eq!(pm.maze_count(), 0);

        pm.initialize(0);
        pm.finish();
    }

    // Tests batches larger than the visible window roll the bars forward
    // Verified by creating one bar per maze
    #[test]
    fn test_large_batch_uses_rolling_window() {
        let count = MAX_INDIVIDUAL_PROGRESS_BARS * 3;
        let mut pm = ProgressManager::new();
        pm.initialize(count);
        assert_eq!(pm.maze_count(), count);

        for index in 0..count {
            pm.start_maze(index, &format!("maze_{index}"), 16);
            pm.update_visited(index, 8);
            pm.complete_maze(index);
        }
        pm.finish();
    }

    // Tests updates for unknown mazes are ignored
    // Verified by resizing state on update_visited
    #[test]
    fn test_updates_for_unknown_maze_are_ignored() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.update_visited(5, 3);
        pm.complete_maze(5);
        pm.start_maze(1, "maze_1", 4);
        pm.update_visited(1, 4);
        pm.finish();
    }
}
