use comfy_table::Table;
use walkmap::Walk;

fn format_coord(walk: &Walk, index: usize) -> String {
    walk.path()
        .0
        .get(index)
        .map(|coord| format!("{:.5}, {:.5}", coord.y, coord.x))
        .unwrap_or_default()
}

pub fn walk_table(walks: &[Walk]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Points", "Distance", "Duration", "Start", "End"]);

    for (index, walk) in walks.iter().enumerate() {
        let points = walk.path().0.len();
        table.add_row(vec![
            format!("{}", index + 1),
            format!("{}", points),
            format!("{}", walk.distance_traveled()),
            format!("{:#}", walk.total_time()),
            format_coord(walk, 0),
            format_coord(walk, points.saturating_sub(1)),
        ]);
    }

    table
}
