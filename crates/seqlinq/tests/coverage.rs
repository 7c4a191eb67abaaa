//! End-to-end operator behaviour.

use seqlinq::{
    CaseInsensitive, Enumerable, Enumerator, FactoryEnumerable, Grouping, IntoSeq, KeyEquality,
    Lookup, SeqError,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    dept: u32,
    salary: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Dept {
    id: u32,
    title: &'static str,
}

fn employees() -> Vec<Employee> {
    vec![
        Employee { name: "ada", dept: 1, salary: 120 },
        Employee { name: "bob", dept: 2, salary: 80 },
        Employee { name: "cy", dept: 1, salary: 95 },
        Employee { name: "di", dept: 3, salary: 80 },
        Employee { name: "ed", dept: 2, salary: 110 },
        Employee { name: "flo", dept: 9, salary: 60 },
    ]
}

fn depts() -> Vec<Dept> {
    vec![
        Dept { id: 1, title: "eng" },
        Dept { id: 2, title: "ops" },
        Dept { id: 3, title: "legal" },
        Dept { id: 4, title: "empty" },
    ]
}

// ============================================================================
// Query pipelines
// ============================================================================

#[test]
fn filter_order_project() {
    let names = employees()
        .into_seq()
        .where_(|e| e.salary >= 80)
        .order_by(|e| e.salary)
        .then_by(|e| e.name)
        .select(|e| e.name)
        .to_vec();
    assert_eq!(names, vec!["bob", "di", "cy", "ed", "ada"]);
}

#[test]
fn descending_then_descending() {
    let names = employees()
        .into_seq()
        .order_by_descending(|e| e.dept)
        .then_by_descending(|e| e.salary)
        .select(|e| e.name)
        .to_vec();
    assert_eq!(names, vec!["flo", "di", "ed", "bob", "ada", "cy"]);
}

#[test]
fn join_then_group() {
    let staff = employees();
    let titles = depts()
        .into_seq()
        .join(staff.iter(), |d| d.id, |e| e.dept, |d, e| (d.title, e.name))
        .group_by(|(title, _)| *title)
        .select(|g| {
            let (title, rows) = g.into_parts();
            (title, rows.len())
        })
        .to_vec();
    assert_eq!(titles, vec![("eng", 2), ("ops", 2), ("legal", 1)]);
}

#[test]
fn group_join_reports_empty_departments() {
    let headcount = depts()
        .into_seq()
        .group_join(employees(), |d| d.id, |e| e.dept, |d, staff| (d.title, staff.len()))
        .where_(|(_, n)| *n == 0)
        .select(|(title, _)| title)
        .to_vec();
    assert_eq!(headcount, vec!["empty"]);
}

#[test]
fn left_join_keeps_unmatched_outer() {
    let rows = employees()
        .into_seq()
        .left_join(depts(), |e| e.dept, |d| d.id, |e, d| {
            (e.name, d.map(|d| d.title).unwrap_or("?"))
        })
        .where_(|(_, title)| *title == "?")
        .to_vec();
    assert_eq!(rows, vec![("flo", "?")]);
}

#[test]
fn aggregate_by_department() {
    let payroll = employees()
        .into_seq()
        .aggregate_by(|e| e.dept, 0u32, |sum, e| sum + e.salary)
        .order_by(|(dept, _)| *dept)
        .to_vec();
    assert_eq!(payroll, vec![(1, 215), (2, 190), (3, 80), (9, 60)]);

    let counts = employees().into_seq().count_by(|e| e.salary).to_vec();
    assert_eq!(counts[1], (80, 2));
}

#[test]
fn lookup_queries() {
    let lookup: Lookup<u32, &str> = employees()
        .into_seq()
        .to_lookup_element(|e| e.dept, |e| e.name);

    assert_eq!(lookup.len(), 4);
    assert_eq!(lookup[&1], ["ada", "cy"]);
    assert!(lookup.get(&42).is_empty());

    let sizes: Vec<usize> = lookup.iter().map(Grouping::len).collect();
    assert_eq!(sizes, vec![2, 2, 1, 1]);
}

#[test]
fn set_operators_with_key_equality() {
    let by_dept = KeyEquality::new(|e: &Employee| e.dept);
    let one_per_dept = employees()
        .into_seq()
        .distinct_with(by_dept)
        .select(|e| e.name)
        .to_vec();
    assert_eq!(one_per_dept, vec!["ada", "bob", "di", "flo"]);

    let outside_eng = employees()
        .into_seq()
        .except_by([1], |e| e.dept)
        .select(|e| e.name)
        .to_vec();
    // One element per distinct key.
    assert_eq!(outside_eng, vec!["bob", "di", "flo"]);
}

#[test]
fn case_insensitive_set_pipeline() {
    let tags = ["Rust", "go", "RUST", "Zig", "GO"]
        .into_seq()
        .union_with(["zig", "Odin"], CaseInsensitive)
        .to_vec();
    assert_eq!(tags, vec!["Rust", "go", "Zig", "Odin"]);
}

// ============================================================================
// Partitioning and paging
// ============================================================================

#[test]
fn paging_with_skip_take() {
    let page = |n: usize| {
        seqlinq::range(1, 10)
            .unwrap()
            .skip(n * 3)
            .take(3)
            .to_vec()
    };
    assert_eq!(page(0), vec![1, 2, 3]);
    assert_eq!(page(3), vec![10]);
    assert!(page(4).is_empty());
}

#[test]
fn chunk_and_tail_operators() {
    let chunks = seqlinq::range(0, 5).unwrap().chunk(2).unwrap().to_vec();
    assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);

    let middle = seqlinq::range(0, 6)
        .unwrap()
        .skip(1)
        .skip_last(1)
        .take_last(2)
        .to_vec();
    assert_eq!(middle, vec![3, 4]);
}

// ============================================================================
// Immediate operators
// ============================================================================

#[test]
fn element_errors() {
    let staff = employees();
    assert!(matches!(
        staff.iter().into_seq().single_where(|e| e.dept == 2),
        Err(SeqError::MoreThanOneMatch)
    ));
    assert_eq!(
        staff.iter().into_seq().single_where(|e| e.dept == 3).unwrap().name,
        "di"
    );
    assert!(matches!(
        staff.iter().into_seq().element_at(6),
        Err(SeqError::IndexOutOfRange { index: 6 })
    ));
}

#[test]
fn numeric_aggregates() {
    let staff = employees();
    assert_eq!(staff.iter().into_seq().sum_of(|e| e.salary).unwrap(), 545);
    assert_eq!(staff.iter().into_seq().max_by(|e| e.salary).unwrap().name, "ada");
    assert_eq!(staff.iter().into_seq().min_by(|e| e.salary).unwrap().name, "flo");
    let mean = staff.iter().into_seq().average_of(|e| e.salary).unwrap();
    assert!((mean - 545.0 / 6.0).abs() < 1e-9);
}

#[test]
fn dictionary_rejects_duplicate_keys() {
    assert!(matches!(
        employees().into_seq().to_dictionary(|e| e.dept),
        Err(SeqError::DuplicateKey)
    ));
    let by_name = employees().into_seq().to_dictionary(|e| e.name).unwrap();
    assert_eq!(by_name["cy"].salary, 95);
}

#[test]
fn generators() {
    assert_eq!(seqlinq::repeat('x', 3).to_vec(), vec!['x', 'x', 'x']);
    assert_eq!(seqlinq::empty::<u8>().default_if_empty().to_vec(), vec![0]);
    assert!(seqlinq::range(0, -1).is_err());
    assert_eq!(seqlinq::from(vec![1, 2]).append(3).to_vec(), vec![1, 2, 3]);
}

// ============================================================================
// Enumerator generation
// ============================================================================

#[test]
fn enumerable_is_re_walkable() {
    let source = FactoryEnumerable::new(|| employees().into_iter().map(|e| e.salary));
    assert_eq!(source.to_seq().sum().unwrap(), 545);
    assert_eq!(source.to_seq().distinct().count(), 5);

    let mut cursor = source.enumerator();
    assert!(cursor.move_next());
    assert_eq!(*cursor.current().unwrap(), 120);
}

#[test]
fn seq_operators_over_enumerators() {
    let data = vec![5, 3, 8, 1];
    let sorted = data.to_seq().order().to_vec();
    assert_eq!(sorted, vec![1, 3, 5, 8]);

    let mut e = data.into_seq().where_(|n| n % 2 == 1).into_enumerator();
    let mut odds = Vec::new();
    while e.move_next() {
        odds.push(*e.current().unwrap());
    }
    assert_eq!(odds, vec![5, 3, 1]);
    assert!(matches!(e.reset(), Err(SeqError::ResetNotSupported)));
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn lookup_serializes_as_groupings() {
    let lookup = ["ab", "c", "de"].into_seq().to_lookup(|s| s.len());
    let json = serde_json::to_string(&lookup).unwrap();
    assert_eq!(
        json,
        r#"[{"key":2,"elements":["ab","de"]},{"key":1,"elements":["c"]}]"#
    );
}
