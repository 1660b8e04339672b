//! 模拟真人输入节奏
//!
//! 纯延时/失误决策生成器，只被提交驱动的兜底打字路径消费。
//! 不影响正确性，随机源可注入种子，便于测试断言分布桶

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 字符分类（不同类别的键速不同）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 高频字母和空格键附近的常用键
    CommonLetter,
    /// 括号、符号等需要组合键的字符
    Special,
    /// 数字
    Digit,
    /// 空格
    Space,
    /// 其他
    Other,
}

impl CharClass {
    /// 判断字符类别
    pub fn of(c: char) -> Self {
        if c == ' ' {
            CharClass::Space
        } else if "aeioutsrnl".contains(c.to_ascii_lowercase()) {
            CharClass::CommonLetter
        } else if "{}[]()<>;:'\".,!@#$%^&*".contains(c) {
            CharClass::Special
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// 打字节奏生成器
///
/// 职责：
/// - 按字符类别生成随机键间延时
/// - 偶发"打错再退格"决策
/// - 疲劳系数每 30~60 次按键缓慢漂移
/// - 单次提交内有效，不跨提交保留状态
pub struct TypingRhythm {
    rng: StdRng,
    /// 疲劳/专注系数（0.8 ~ 1.2）
    fatigue: f64,
    strokes_since_recalc: u32,
    recalc_after: u32,
    chars_since_pause: u32,
}

impl TypingRhythm {
    /// 创建节奏生成器；`seed` 为空时随机取种子
    pub fn new(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(rand::random))
    }

    /// 用固定种子创建（同种子产生同序列）
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let recalc_after = rng.random_range(30..=60);
        Self {
            rng,
            fatigue: 1.0,
            strokes_since_recalc: 0,
            recalc_after,
            chars_since_pause: 0,
        }
    }

    /// 生成下一个字符的键前延时
    pub fn key_delay(&mut self, c: char) -> Duration {
        let base: u64 = match CharClass::of(c) {
            CharClass::CommonLetter => self.rng.random_range(40..=80),
            CharClass::Special => self.rng.random_range(80..=150),
            CharClass::Digit => self.rng.random_range(60..=120),
            CharClass::Space => self.rng.random_range(30..=60),
            CharClass::Other => self.rng.random_range(50..=100),
        };

        let mut delay = (base as f64 * self.fatigue).round() as u64;

        // 连续敲了一阵后偶发爆发（变快）
        if self.chars_since_pause > 20 && self.rng.random_bool(0.15) {
            delay = (delay as f64 * 0.6).round() as u64;
        }

        // 偶发停顿思考（变慢）
        if self.rng.random_bool(0.05) {
            delay = self.rng.random_range(200..=500);
        }

        self.record_stroke();
        Duration::from_millis(delay)
    }

    /// 对普通字符以 2% 概率给出邻键误击；特殊字符和空格不模拟失误
    pub fn typo_for(&mut self, c: char) -> Option<char> {
        if matches!(CharClass::of(c), CharClass::Special | CharClass::Space) {
            return None;
        }
        if !self.rng.random_bool(0.02) {
            return None;
        }
        let neighbors = nearby_keys(c.to_ascii_lowercase())?;
        let idx = self.rng.random_range(0..neighbors.len());
        neighbors.chars().nth(idx)
    }

    /// 区间内随机停顿
    pub fn pause(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        Duration::from_millis(self.rng.random_range(min_ms..=max_ms))
    }

    /// 敲了一阵之后的小憩；没到时候返回 None
    pub fn micro_pause(&mut self) -> Option<Duration> {
        let threshold = self.rng.random_range(30..=60);
        if self.chars_since_pause > threshold {
            self.chars_since_pause = 0;
            Some(self.pause(100, 300))
        } else {
            None
        }
    }

    /// 记录一次按键，按需重算疲劳系数
    fn record_stroke(&mut self) {
        self.chars_since_pause += 1;
        self.strokes_since_recalc += 1;
        if self.strokes_since_recalc >= self.recalc_after {
            self.fatigue = 0.8 + self.rng.random_range(0.0..0.4);
            self.strokes_since_recalc = 0;
            self.recalc_after = self.rng.random_range(30..=60);
        }
    }
}

/// 键盘邻键表（QWERTY）
fn nearby_keys(c: char) -> Option<&'static str> {
    let keys = match c {
        'a' => "sqz",
        'b' => "vngh",
        'c' => "xdfv",
        'd' => "serfcx",
        'e' => "wrsd",
        'f' => "dgrtcv",
        'g' => "fhtybv",
        'h' => "gjuynb",
        'i' => "uojk",
        'j' => "hkuinm",
        'k' => "jlioum",
        'l' => "kop",
        'm' => "njk",
        'n' => "bmhjk",
        'o' => "iplk",
        'p' => "ol",
        'q' => "wa",
        'r' => "etdf",
        's' => "awedxz",
        't' => "ryfg",
        'u' => "yihj",
        'v' => "cfgb",
        'w' => "qeas",
        'x' => "zsdc",
        'y' => "tugh",
        'z' => "asx",
        _ => return None,
    };
    Some(keys)
}
