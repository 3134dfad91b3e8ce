use {
    def::{ColumnMeta, DataType, Dataset, Row, Value},
    executor::{Error, Executor, QueryRequest, QueryResult},
    rand::{prelude::*, rngs::StdRng},
    std::{cmp::Ordering, thread},
};

const DEPARTMENTS: [&str; 5] = ["Sales", "IT", "HR", "Finance", "Legal"];
const COUNTRIES: [&str; 4] = ["USA", "CAN", "MEX", "GBR"];

/// ID, AGE in [18, 65), one of five departments, one of four countries.
fn synthetic(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let columns = vec![
        ColumnMeta::new("ID", DataType::Numeric),
        ColumnMeta::new("AGE", DataType::Numeric).with_label("Age in years"),
        ColumnMeta::new("DEPARTMENT", DataType::Character),
        ColumnMeta::new("COUNTRY", DataType::Character),
    ];

    let rows = (0..rows)
        .map(|id| {
            Row::new(vec![
                Value::Integer(id as i64),
                Value::Integer(rng.gen_range(18..65)),
                Value::from(*DEPARTMENTS.choose(&mut rng).unwrap()),
                Value::from(*COUNTRIES.choose(&mut rng).unwrap()),
            ])
        })
        .collect();

    Dataset::new(columns, rows).unwrap()
}

fn run(executor: &Executor, clause: &str) -> QueryResult {
    let filter = executor.compile(clause).unwrap();

    executor.execute::<&str>(filter.as_ref(), None, 0, usize::MAX)
}

fn ids(result: &QueryResult) -> Vec<Value> {
    result.page_rows.iter().map(|row| row[0].clone()).collect()
}

#[test]
fn filtered_never_exceeds_total() {
    let dataset = synthetic(200, 1);
    let executor = Executor::new(&dataset).unwrap();

    let clauses = [
        "AGE > 30",
        "AGE < 18",
        "DEPARTMENT = 'Sales' OR AGE >= 40",
        "NOT (COUNTRY IN ('USA'))",
        "AGE = 'thirty'",
        "ID >= 0",
    ];

    for clause in clauses {
        let result = run(&executor, clause);
        assert!(result.filtered_rows <= result.total_rows, "{}", clause);
        assert_eq!(result.total_rows, 200);
    }

    assert_eq!(run(&executor, "ID >= 0").filtered_rows, 200);
    assert_eq!(run(&executor, "AGE = 'thirty'").filtered_rows, 0);

    let unfiltered = executor.execute::<&str>(None, None, 0, 10);
    assert_eq!(unfiltered.filtered_rows, unfiltered.total_rows);
}

#[test]
fn selectivity_of_independent_predicates() {
    // P(AGE > 30) = 34/47, P(DEPARTMENT = 'Sales') = 1/5
    let expected = 34.0 / 47.0 / 5.0;

    let dataset = synthetic(100, 7);
    let executor = Executor::new(&dataset).unwrap();
    let result = run(&executor, "AGE > 30 AND DEPARTMENT = 'Sales'");

    let oracle = dataset
        .rows()
        .iter()
        .filter(|row| {
            row[1].compare(&Value::Integer(30)) == Some(Ordering::Greater)
                && row[2] == Value::from("Sales")
        })
        .count();
    assert_eq!(result.filtered_rows, oracle);
    assert!(result.filtered_rows <= 40);

    let dataset = synthetic(10_000, 7);
    let executor = Executor::new(&dataset).unwrap();

    let both = run(&executor, "AGE > 30 AND DEPARTMENT = 'Sales'").filtered_rows as f64;
    let age = run(&executor, "AGE > 30").filtered_rows as f64;
    let sales = run(&executor, "DEPARTMENT = 'Sales'").filtered_rows as f64;
    let n = 10_000.0;

    assert!((both / n - expected).abs() < 0.02, "{}", both / n);
    assert!((both / n - (age / n) * (sales / n)).abs() < 0.02);
}

#[test]
fn in_and_not_in_partition() {
    let dataset = synthetic(500, 3);
    let executor = Executor::new(&dataset).unwrap();

    let inside = run(&executor, "COUNTRY IN ('USA','CAN')");
    let outside = run(&executor, "COUNTRY NOT IN ('USA','CAN')");

    assert_eq!(inside.filtered_rows + outside.filtered_rows, 500);

    let mut all = [ids(&inside), ids(&outside)].concat();
    all.sort_by(|a, b| a.compare(b).unwrap());
    all.dedup();
    assert_eq!(all.len(), 500);
}

#[test]
fn nulls_fall_outside_both_sides() {
    let columns = vec![ColumnMeta::new("COUNTRY", DataType::Character)];
    let rows = ["USA", "", "MEX"]
        .into_iter()
        .map(|c| Row::new(vec![Some(c).filter(|c| !c.is_empty()).into()]))
        .collect();
    let dataset = Dataset::new(columns, rows).unwrap();
    let executor = Executor::new(&dataset).unwrap();

    assert_eq!(run(&executor, "COUNTRY IN ('USA','CAN')").filtered_rows, 1);
    assert_eq!(run(&executor, "COUNTRY NOT IN ('USA','CAN')").filtered_rows, 1);
    assert_eq!(run(&executor, "COUNTRY IS MISSING").filtered_rows, 1);
    assert_eq!(run(&executor, "COUNTRY IS NOT NULL").filtered_rows, 2);
}

#[test]
fn double_negation() {
    let dataset = synthetic(300, 11);
    let executor = Executor::new(&dataset).unwrap();

    let filters = [
        "AGE > 30",
        "DEPARTMENT = 'IT' OR COUNTRY = 'MEX'",
        "AGE <= 40 AND NOT COUNTRY IN ('USA', 'GBR')",
        "(AGE GT 50 | DEPARTMENT EQ 'HR') & ID < 150",
    ];

    for filter in filters {
        let expr = executor.compile(filter).unwrap().unwrap();
        let negated = executor
            .compile(&format!("NOT (NOT ({}))", filter))
            .unwrap()
            .unwrap();

        for row in dataset.rows() {
            assert_eq!(expr.matches(row), negated.matches(row), "{}", filter);
        }
    }
}

#[test]
fn compile_is_deterministic() {
    let dataset = synthetic(100, 5);
    let executor = Executor::new(&dataset).unwrap();
    let clause = "age >= 21 and (department in ('Sales', 'Legal') or not country = 'USA')";

    let first = executor.compile(clause).unwrap();
    let second = executor.compile(clause).unwrap();
    assert_eq!(first, second);

    let first = executor.execute::<&str>(first.as_ref(), None, 0, 100);
    let second = executor.execute::<&str>(second.as_ref(), None, 0, 100);
    assert_eq!(first, second);
}

#[test]
fn longest_name_wins() {
    let columns = vec![
        ColumnMeta::new("NAME", DataType::Character),
        ColumnMeta::new("FIRSTNAME", DataType::Character),
    ];
    let rows = vec![
        Row::new(vec!["Bob".into(), "Ann".into()]),
        Row::new(vec!["Smith".into(), "Bob".into()]),
    ];
    let dataset = Dataset::new(columns, rows).unwrap();
    let executor = Executor::new(&dataset).unwrap();

    let result = run(&executor, "FIRSTNAME = 'Bob'");
    assert_eq!(result.page_rows, vec![dataset.rows()[1].clone()]);

    let result = run(&executor, "firstName = 'Bob' or Name = 'Bob'");
    assert_eq!(result.filtered_rows, 2);
}

#[test]
fn pages_are_disjoint_and_ordered() {
    let dataset = synthetic(400, 9);
    let executor = Executor::new(&dataset).unwrap();
    let filter = executor.compile("AGE > 25 AND COUNTRY NE 'GBR'").unwrap();
    let columns = ["ID", "age"];

    let first = executor.execute(filter.as_ref(), Some(&columns[..]), 0, 10);
    let second = executor.execute(filter.as_ref(), Some(&columns[..]), 10, 10);
    let both = executor.execute(filter.as_ref(), Some(&columns[..]), 0, 20);

    assert_eq!(first.returned_rows, 10);
    assert_eq!(second.returned_rows, 10);
    assert_eq!(second.start_row, 10);
    assert_eq!(first.filtered_rows, second.filtered_rows);
    assert_eq!(first.columns_in_page, ["ID", "AGE"]);
    assert_eq!(
        [first.page_rows, second.page_rows].concat(),
        both.page_rows
    );

    let past_end = executor.execute(filter.as_ref(), Some(&columns[..]), 10_000, 10);
    assert!(past_end.page_rows.is_empty());
    assert_eq!(past_end.filtered_rows, both.filtered_rows);
}

#[test]
fn malformed_clause_is_an_error() {
    let dataset = synthetic(10, 2);
    let executor = Executor::new(&dataset).unwrap();

    let request = QueryRequest {
        filter: Some("AGE >".into()),
        ..Default::default()
    };

    match executor.query(&request) {
        Err(Error::Parse { source }) => {
            assert_eq!(source.offset(), 5);
            assert_eq!(source.token(), "");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn concurrent_queries_share_one_dataset() {
    let dataset = synthetic(1_000, 13);
    let executor = Executor::new(&dataset).unwrap();
    let clauses = ["AGE > 30", "DEPARTMENT = 'IT'", "COUNTRY IN ('USA', 'CAN')", "ID < 500"];

    let expected: Vec<_> = clauses.iter().map(|c| run(&executor, c)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = clauses
            .iter()
            .map(|clause| {
                let executor = &executor;
                scope.spawn(move || run(executor, clause))
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn deep_clauses_fail_to_compile_instead_of_crashing() {
    let dataset = synthetic(50, 17);
    let executor = Executor::new(&dataset).unwrap();

    let clauses = [
        "(".repeat(100_000),
        "NOT ".repeat(100_000) + "AGE > 30",
        "AGE > 30 OR ".repeat(100_000) + "AGE > 30",
    ];

    for clause in clauses {
        assert!(matches!(
            executor.compile(&clause),
            Err(Error::Parse {
                source: parser::Error::TooDeep { .. }
            })
        ));
    }

    // the deepest accepted trees still bind and evaluate
    let chain = "ID = -1 OR ".repeat(255) + "AGE > 30";
    assert_eq!(
        run(&executor, &chain).filtered_rows,
        run(&executor, "AGE > 30").filtered_rows
    );

    let negated = "NOT ".repeat(254) + "AGE > 30";
    assert_eq!(
        run(&executor, &negated).filtered_rows,
        run(&executor, "AGE > 30").filtered_rows
    );
}
