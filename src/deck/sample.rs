use crate::core::VocabularyRecord;

const SAMPLE: [(&str, &str, &str); 12] = [
    ("你好", "nǐ hǎo", "hello"),
    ("谢谢", "xièxie", "thank you"),
    ("再见", "zàijiàn", "goodbye"),
    ("朋友", "péngyou", "friend"),
    ("学生", "xuésheng", "student"),
    ("老师", "lǎoshī", "teacher"),
    ("中国", "Zhōngguó", "China"),
    ("水", "shuǐ", "water"),
    ("吃饭", "chī fàn", "to eat a meal"),
    ("电脑", "diànnǎo", "computer"),
    ("图书馆", "túshūguǎn", "library"),
    ("汉日词典", "Hàn-Rì cídiǎn", "Chinese-Japanese dictionary"),
];

pub fn sample_deck() -> Vec<VocabularyRecord> {
    SAMPLE
        .iter()
        .map(|(front, pronunciation, meaning)| {
            VocabularyRecord::new(*front, *pronunciation, *meaning)
        })
        .collect()
}
