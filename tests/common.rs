#![cfg(feature = "std")]

use std::{fmt::Debug, fs::File, str::FromStr};

use csv::ReaderBuilder;
use statescan::{
    avec,
    sans::{Query, RecordLayout, extract::extract, locate::locate},
};

const PATH: &str = "fixtures/states.bin";
const EXPECTED: &str = "fixtures/states.csv";
const RECORD_LEN: usize = 6;

#[test]
fn extract_fixture() {
    let data = std::fs::read(PATH).unwrap();

    for row in expectations::<u64>("extract") {
        let [index, offset, width, value] = row[..] else {
            panic!("malformed row: {row:?}");
        };

        let record = &data[index as usize * RECORD_LEN..][..RECORD_LEN];
        let location = locate(offset as i64).unwrap();

        assert_eq!(extract(location, width as u32, record).unwrap(), value, "{row:?}");
    }
}

#[test]
fn scan_slice_fixture() {
    let data = std::fs::read(PATH).unwrap();

    for (query, start, expected) in scans() {
        let result = avec::scan_slice(&data, query, start).unwrap();
        assert_eq!(result.sentinel(), expected, "{query:?} from {start}");
    }
}

#[test]
fn scan_reader_fixture() {
    let mut file = File::open(PATH).unwrap();

    for (query, start, expected) in scans() {
        let result = avec::scan_reader(&mut file, query, start).unwrap();
        assert_eq!(result.sentinel(), expected, "{query:?} from {start}");
    }
}

#[test]
fn scan_path_fixture() {
    for (query, start, expected) in scans() {
        let result = avec::scan_path(PATH, query, start).unwrap();
        assert_eq!(result.sentinel(), expected, "{query:?} from {start}");
    }
}

fn scans() -> Vec<(Query, u64, i64)> {
    expectations::<i64>("scan")
        .into_iter()
        .map(|row| {
            let [start, offset, width, target, expected] = row[..] else {
                panic!("malformed row: {row:?}");
            };

            let layout = RecordLayout::new(RECORD_LEN, width as u32).unwrap();
            let location = locate(offset as i64).unwrap();
            let query = Query::new(layout, location, target as u8).unwrap();

            (query, start as u64, expected)
        })
        .collect()
}

/// Read the rows of the expectations file with a given leading tag.
fn expectations<T: FromStr<Err: Debug>>(kind: &str) -> Vec<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(EXPECTED)
        .unwrap();

    reader
        .records()
        .map(|r| r.unwrap())
        .filter(|r| &r[0] == kind)
        .map(|r| r.iter().skip(1).map(|f| f.parse().unwrap()).collect())
        .collect()
}
