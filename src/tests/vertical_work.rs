use alloc::{string::ToString, vec, vec::Vec};

use crate::{
    node::{Border, NodeBuilder, Row, TableSubtype},
    tests::util::{frac, grid_cursor, grid_rows, open_at, table, vertical_work},
    vertical_work::{cells_to_columns, columns_to_cells, split_into_cells, ColumnRepair, GridCursor, VerticalWork},
    zipper::{Dir, Focus, MoveVerticalDirection, Zipper},
};

fn cursor(col: usize, row: usize, offset: usize) -> GridCursor {
    GridCursor { col, row, offset }
}

#[test]
fn test_split_into_cells() {
    let mut ids = NodeBuilder::new();
    let cells = split_into_cells(glyphs!(ids, "2x+5=10"));
    let cells: Vec<_> = cells.into_iter().map(|c| ids.row(c).to_string()).collect();
    assert_eq!(cells, vec!["", "2x", "", "+", "5", "", "=", "", "10", ""]);

    // A leading sign belongs to its term
    let cells = split_into_cells(glyphs!(ids, "-a"));
    assert_eq!(cells.len(), 3);
    assert_eq!(ids.row(cells[1].clone()).to_string(), "-a");

    assert_eq!(split_into_cells(vec![]).len(), 1);
}

#[test]
fn test_start_vertical_work() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "2x+5", "=10")
        .vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);

    assert!(zipper.in_vertical_work());
    assert_eq!(grid_rows(&zipper), vec![" |2x| |+|5| |=| |10| ", " | | | | | | | | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(0, 1, 0));

    match &zipper.breadcrumbs[0].focus {
        Focus::Cell(table) => {
            assert_eq!(table.subtype, TableSubtype::Algebra);
            assert_eq!((table.row_count, table.col_count), (2, 10));
            assert_eq!(table.left.len(), 10);
            assert_eq!(table.right.len(), 9);
        }
        other => panic!("expected a table cell, got {:?}", other),
    }
}

#[test]
fn test_start_vertical_work_only_at_root() {
    let mut ids = NodeBuilder::new();
    let root = row!(ids, frac(&mut ids, "1", "2"));
    let zipper = open_at(root, &[(0, 1)], 0);

    // Already in the denominator, with nothing below
    let moved = zipper.clone().vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);
    assert_eq!(moved, zipper);
}

#[test]
fn test_insert_operator_in_empty_cell() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(
        &mut ids,
        &[&["", "2x", "", "+", "5", ""], &["", "2x", "", "", "", ""]],
        cursor(2, 1, 0),
    );

    let zipper = zipper.vertical_work_insert_char('+', &mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |2x| | |+|5| ", " |2x|+| | | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(3, 1, 0));
}

#[test]
fn test_insert_operator_splits_term() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "cd", ""], &["", "", ""]], cursor(1, 0, 1));

    let zipper = zipper.vertical_work_insert_char('+', &mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |c|+|d| ", " | | | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(3, 0, 0));

    // Backspacing the operator joins the terms back together
    let zipper = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(grid_cursor(&zipper), cursor(2, 0, 1));

    let zipper = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |cd| ", " | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(1, 0, 1));
}

#[test]
fn test_backspace_term_before_operator() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "+", "b", ""], &["", "", "", "", ""]], cursor(1, 0, 1));

    let zipper = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |+b| ", " | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(1, 0, 0));
}

#[test]
fn test_backspace_removes_empty_column() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "", "b", ""], &["", "", "", "", ""]], cursor(2, 0, 0));

    let zipper = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |a|b| ", " | | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(1, 0, 1));
}

#[test]
fn test_backspace_at_first_cell() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", ""], &["", "b", ""]], cursor(0, 1, 0));
    assert_eq!(zipper.clone().vertical_work_backspace(&mut ids), zipper);
}

#[test]
fn test_insert_operand_after_operator_column() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "+", "b", ""], &["", "", "", "", ""]], cursor(2, 1, 0));

    let zipper = zipper.vertical_work_insert_char('x', &mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |a|+|b| ", " | | |x| "]);
    assert_eq!(grid_cursor(&zipper), cursor(3, 1, 1));
}

#[test]
fn test_insert_operand_pads_row() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "ab", ""], &["", "", ""]], cursor(0, 1, 0));

    let zipper = zipper.vertical_work_insert_char('c', &mut ids);
    assert_eq!(grid_rows(&zipper), vec![" | |ab| ", " |c| | "]);
    assert_eq!(grid_cursor(&zipper), cursor(1, 1, 1));
}

#[test]
fn test_next_repair() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a"], &["", ""]], cursor(0, 0, 0));
    let work = VerticalWork::from_zipper(zipper).unwrap();
    assert_eq!(work.next_repair(), Some(ColumnRepair::PadEnd));

    let work = work.adjust_columns(&mut ids);
    assert_eq!(work.next_repair(), None);
    assert_eq!(work.col_count(), 3);

    let zipper = vertical_work(&mut ids, &[&["", "", "", "a", ""], &["", "", "", "", ""]], cursor(2, 0, 0));
    let work = VerticalWork::from_zipper(zipper).unwrap();
    assert_eq!(work.next_repair(), Some(ColumnRepair::MergeEmpty(0)));

    // The cursor's column survives
    let work = work.adjust_columns(&mut ids);
    assert_eq!(work.col_count(), 3);
    assert_eq!(work.cursor, cursor(0, 0, 0));
}

#[test]
fn test_redundant_column_removed() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "", "b", ""], &["", "", "", "", ""]], cursor(1, 0, 1));
    let work = VerticalWork::from_zipper(zipper).unwrap();
    assert_eq!(work.next_repair(), Some(ColumnRepair::RemoveRedundant(2)));

    let zipper = work.adjust_columns(&mut ids).into_zipper();
    assert_eq!(grid_rows(&zipper), vec![" |a|b| ", " | | | "]);
}

#[test]
fn test_column_before_operator_kept() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "", "+", "b", ""], &["", "", "", "+", "c", ""]], cursor(1, 0, 1));
    let work = VerticalWork::from_zipper(zipper).unwrap();

    // Removing the empty column would leave the lower "+" with nothing to its left
    assert_eq!(work.next_repair(), None);
}

#[test]
fn test_down_adds_third_row() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "+", "b", ""], &["", "c", "", "", ""]], cursor(0, 1, 0));

    let zipper = zipper.vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);
    let work = VerticalWork::from_zipper(zipper.clone()).unwrap();
    assert_eq!(work.row_count, 3);
    assert_eq!(work.row_styles[2].border, Some(Border::Top));
    assert_eq!(work.row_styles[1].border, None);

    // Column 0 is empty all the way down, so the cursor settles in the next column
    assert_eq!(work.cursor, cursor(1, 2, 0));

    // No fourth row
    let again = zipper.clone().vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);
    assert_eq!(again, zipper);

    // Leaving the empty third row removes it
    let zipper = zipper.vertical_work_move_vertically(MoveVerticalDirection::Up, &mut ids);
    let work = VerticalWork::from_zipper(zipper).unwrap();
    assert_eq!(work.row_count, 2);
    assert_eq!(work.row_styles.len(), 2);
    assert_eq!(work.cursor, cursor(1, 1, 0));
}

#[test]
fn test_up_from_second_row_collapses() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "2x+5", "=10")
        .vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids)
        .vertical_work_move_vertically(MoveVerticalDirection::Up, &mut ids);

    assert!(!zipper.in_vertical_work());
    assert_eq!(zipper.depth(), 0);
    assert_eq!(zipper.to_string(), "|2x+5=10");
}

#[test]
fn test_up_keeps_worked_rows() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "ab", ""], &["", "c", ""]], cursor(1, 1, 1));

    let zipper = zipper.vertical_work_move_vertically(MoveVerticalDirection::Up, &mut ids);
    assert!(zipper.in_vertical_work());
    assert_eq!(grid_cursor(&zipper), cursor(1, 0, 1));

    // Nothing above the first row
    let again = zipper.clone().vertical_work_move_vertically(MoveVerticalDirection::Up, &mut ids);
    assert_eq!(again, zipper);
}

#[test]
fn test_collapse_places_cursor() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "ab", "", "+", "c", ""], &["", "", "", "", "", ""]], cursor(4, 1, 0));
    let zipper = VerticalWork::from_zipper(zipper).unwrap().collapse();
    assert_eq!(zipper.to_string(), "ab+|c");
}

#[test]
fn test_third_row_skips_empty_columns() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(
        &mut ids,
        &[&["", "a", "", "b", ""], &["", "c", "", "d", ""], &["", "e", "", "", ""]],
        cursor(1, 2, 1),
    );

    let zipper = zipper.vertical_work_move_horizontally(Dir::Right, &mut ids);
    assert_eq!(grid_cursor(&zipper), cursor(3, 2, 0));
}

#[test]
fn test_third_row_backspace_skips_empty_columns() {
    let mut ids = NodeBuilder::new();
    let rows: &[&[&str]] = &[&["", "a", "", "b", ""], &["", "c", "", "d", ""], &["", "", "", "", ""]];

    // Only empty columns before the cursor, so there is nowhere to go
    let zipper = vertical_work(&mut ids, rows, cursor(1, 2, 0));
    let deleted = zipper.clone().vertical_work_backspace(&mut ids);
    assert_eq!(grid_rows(&deleted), vec![" |a| |b| ", " |c| |d| ", " | | | | "]);
    assert_eq!(grid_cursor(&deleted), cursor(1, 2, 0));

    let zipper = vertical_work(&mut ids, rows, cursor(3, 2, 0));
    let deleted = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(grid_cursor(&deleted), cursor(1, 2, 0));
}

#[test]
fn test_third_row_typing_avoids_empty_columns() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(
        &mut ids,
        &[&["", "a", "", "b", ""], &["", "c", "", "d", ""], &["", "", "", "", ""]],
        cursor(2, 2, 0),
    );

    let zipper = zipper.vertical_work_insert_char('x', &mut ids);
    assert_eq!(grid_rows(&zipper), vec![" |a| |b| ", " |c| |d| ", " | | |x| "]);
    assert_eq!(grid_cursor(&zipper), cursor(3, 2, 1));
}

#[test]
fn test_third_row_typing_with_no_column_to_use() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&[""], &[""], &[""]], cursor(0, 2, 0));
    assert_eq!(zipper.clone().vertical_work_insert_char('x', &mut ids), zipper);
}

#[test]
fn test_start_vertical_work_repairs_columns() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "a==", "")
        .vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);

    assert_eq!(grid_rows(&zipper), vec![" |a| |=| |=| ", " | | | | | | "]);
    assert_eq!(grid_cursor(&zipper), cursor(0, 1, 0));
    assert_eq!(VerticalWork::from_zipper(zipper).unwrap().next_repair(), None);
}

#[test]
fn test_start_vertical_work_only_once() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "a+b", "")
        .vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);
    let mut zipper = zipper;
    for _ in 0..20 {
        zipper = zipper.vertical_work_move_horizontally(Dir::Left, &mut ids);
    }
    assert!(!zipper.in_vertical_work());
    assert_eq!(zipper.depth(), 0);

    let moved = zipper.clone().vertical_work_move_vertically(MoveVerticalDirection::Down, &mut ids);
    assert_eq!(moved, zipper);
    assert_eq!(moved.to_row().children.len(), 1);
}

#[test]
fn test_move_horizontally_leaves_table() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", ""], &["", "", ""]], cursor(0, 0, 0));

    let zipper = zipper.vertical_work_move_horizontally(Dir::Left, &mut ids);
    assert!(!zipper.in_vertical_work());
    assert_eq!(zipper.depth(), 0);
    assert_eq!(zipper.row.left.len(), 0);
}

#[test]
fn test_from_zipper_outside_table() {
    let mut ids = NodeBuilder::new();
    let zipper = zipper!(ids, "1", "2");
    assert_eq!(VerticalWork::from_zipper(zipper.clone()), Err(zipper));
}

#[test]
fn test_vertical_work_ignores_matrix() {
    let mut ids = NodeBuilder::new();
    let matrix = table(&mut ids, TableSubtype::Matrix, &[&["a", "b"]]);
    let zipper = open_at(row!(ids, matrix), &[(0, 0)], 1);
    assert!(!zipper.in_vertical_work());

    let typed = zipper.vertical_work_insert_char('+', &mut ids);
    assert_eq!(typed.to_string(), "[a+|&b]");
}

#[test]
fn test_cells_columns_reshape() {
    let mut ids = NodeBuilder::new();
    let cells: Vec<Row> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| {
        let children = ids.glyphs(s);
        ids.row(children)
    }).collect();

    let columns = cells_to_columns(cells.clone(), 3);
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[1].iter().map(|r| r.to_string()).collect::<Vec<_>>(), vec!["b", "e"]);
    assert_eq!(columns_to_cells(columns), cells);
}

#[test]
fn test_round_trip_through_zipper() {
    let mut ids = NodeBuilder::new();
    let zipper = vertical_work(&mut ids, &[&["", "a", "+", "b", ""], &["", "c", "", "", ""]], cursor(1, 1, 1));
    let work = VerticalWork::from_zipper(zipper.clone()).unwrap();
    assert_eq!(work.into_zipper(), zipper);
}

#[test]
fn test_editing_around_vertical_work() {
    let mut ids = NodeBuilder::new();
    let zipper: Zipper = zipper!(ids, "1", "");
    let zipper = zipper.vertical_work_insert_char('+', &mut ids);
    assert_eq!(zipper.to_string(), "1+|");

    let zipper = zipper.vertical_work_backspace(&mut ids);
    assert_eq!(zipper.to_string(), "1|");
}
