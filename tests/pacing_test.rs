//! 打字节奏生成器测试

use std::time::Duration;

use leetcode_search_submit::services::{CharClass, TypingRhythm};

#[test]
fn test_char_class_buckets() {
    assert_eq!(CharClass::of('e'), CharClass::CommonLetter);
    assert_eq!(CharClass::of('T'), CharClass::CommonLetter);
    assert_eq!(CharClass::of('{'), CharClass::Special);
    assert_eq!(CharClass::of(';'), CharClass::Special);
    assert_eq!(CharClass::of('7'), CharClass::Digit);
    assert_eq!(CharClass::of(' '), CharClass::Space);
    assert_eq!(CharClass::of('x'), CharClass::Other);
}

#[test]
fn test_same_seed_same_sequence() {
    let sample = "def two_sum(nums): return {}";

    let mut first = TypingRhythm::seeded(42);
    let mut second = TypingRhythm::seeded(42);

    for c in sample.chars() {
        assert_eq!(
            first.typo_for(c),
            second.typo_for(c),
            "同种子的误击决策应该一致"
        );
        assert_eq!(
            first.key_delay(c),
            second.key_delay(c),
            "同种子的延时序列应该一致"
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let sample = "class Solution: pass";

    let mut first = TypingRhythm::seeded(1);
    let mut second = TypingRhythm::seeded(2);

    let delays_a: Vec<Duration> = sample.chars().map(|c| first.key_delay(c)).collect();
    let delays_b: Vec<Duration> = sample.chars().map(|c| second.key_delay(c)).collect();
    assert_ne!(delays_a, delays_b, "不同种子应该产生不同节奏");
}

#[test]
fn test_key_delay_bounds() {
    let mut rhythm = TypingRhythm::seeded(7);

    // 疲劳系数 0.8~1.2、爆发 0.6 倍、思考上限 500ms，
    // 任何字符的延时都应该落在一个宽松的合理区间里
    for _ in 0..500 {
        for c in ['e', '{', '7', ' ', 'x'] {
            let delay = rhythm.key_delay(c);
            assert!(delay >= Duration::from_millis(10), "延时过短: {:?}", delay);
            assert!(delay <= Duration::from_millis(500), "延时过长: {:?}", delay);
        }
    }
}

#[test]
fn test_typo_only_for_plain_chars() {
    let mut rhythm = TypingRhythm::seeded(9);

    for _ in 0..1000 {
        assert!(rhythm.typo_for('{').is_none(), "特殊字符不模拟误击");
        assert!(rhythm.typo_for(' ').is_none(), "空格不模拟误击");
    }
}

#[test]
fn test_typo_is_nearby_key() {
    let mut rhythm = TypingRhythm::seeded(11);

    // 2% 概率，1000 次里大概率能观察到若干次误击
    let mut observed = 0;
    for _ in 0..1000 {
        if let Some(wrong) = rhythm.typo_for('e') {
            observed += 1;
            assert!(
                "wrsd".contains(wrong),
                "误击应该是 'e' 的邻键: {}",
                wrong
            );
        }
    }
    assert!(observed > 0, "1000 次里应该至少出现一次误击");
}

#[test]
fn test_pause_within_range() {
    let mut rhythm = TypingRhythm::seeded(13);
    for _ in 0..200 {
        let pause = rhythm.pause(100, 300);
        assert!(pause >= Duration::from_millis(100));
        assert!(pause <= Duration::from_millis(300));
    }
}

#[test]
fn test_micro_pause_eventually_fires() {
    let mut rhythm = TypingRhythm::seeded(17);

    let mut fired = false;
    for _ in 0..200 {
        rhythm.key_delay('a');
        if rhythm.micro_pause().is_some() {
            fired = true;
            break;
        }
    }
    assert!(fired, "连续敲 200 键之内应该出现小憩");
}
