use bst_maps::avl_tree::AvlMap;
use bst_maps::bst::BstMap;
use bst_maps::words::{self, Report};
use bst_maps::Error;
use std::io::Write;
use std::{env, fs, process};

const TEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
                    wisdom, it was the age of foolishness... A tale of two cities, told to you.";

#[test]
fn int_test_both_maps_agree() {
    let words = words::tokenize(TEXT);

    let mut bst: BstMap<String, usize> = BstMap::new();
    let mut avl: AvlMap<String, usize> = AvlMap::new();
    words::word_frequencies(&words, &mut bst).unwrap();
    words::word_frequencies(&words, &mut avl).unwrap();

    assert_eq!(bst.len(), avl.len());
    assert_eq!(
        bst.iter().collect::<Vec<(&String, &usize)>>(),
        avl.iter().collect::<Vec<(&String, &usize)>>(),
    );
    assert_eq!(avl.get("it"), Some(&4));
    assert_eq!(avl.get("of"), Some(&5));
    assert_eq!(bst.iter().map(|(_, count)| count).sum::<usize>(), words.len());

    let bst_report = Report::new(&words, &bst).with_is_bst(bst.is_bst());
    let avl_report = Report::new(&words, &avl)
        .with_is_bst(avl.is_bst())
        .with_is_balanced(avl.is_balanced());

    assert_eq!(bst_report.total_words, avl_report.total_words);
    assert_eq!(bst_report.distinct_words, avl_report.distinct_words);
    assert_eq!(avl_report.frequencies, bst_report.frequencies);
    assert_eq!(
        avl_report.frequencies,
        vec![("tale".to_string(), Some(1)), ("you".to_string(), Some(1))],
    );
    assert_eq!(avl_report.is_bst, Some(true));
    assert_eq!(avl_report.is_balanced, Some(true));
    assert_eq!(bst_report.is_balanced, None);
}

#[test]
fn int_test_read_words() {
    let path = env::temp_dir().join(format!("bst-maps-words-{}.txt", process::id()));
    {
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(TEXT.as_bytes()).unwrap();
    }

    let words = words::read_words(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(words, words::tokenize(TEXT));
    assert_eq!(words[0], "it");
}

#[test]
fn int_test_read_words_missing_file() {
    let path = env::temp_dir().join("bst-maps-words-does-not-exist.txt");
    match words::read_words(&path) {
        Err(Error::Io(_)) => {},
        other => panic!("expected io error, got {:?}", other),
    }
}
