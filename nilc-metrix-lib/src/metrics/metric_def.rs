use super::{MetricCategory, MetricLevel, MetricSource};

/// One row of the static metric table.
///
/// Every row carries both the current classification (`category` and `level`) and the class label used by
/// the legacy catalog, so the two catalog versions always cover exactly the same keys and sources.
#[derive(Debug)]
pub struct MetricDef {
    pub key: &'static str,
    pub source: MetricSource,
    pub category: MetricCategory,
    pub legacy_class: &'static str,
    pub level: MetricLevel,
    pub description: &'static str,
}

macro_rules! metric_def {
    ($key:expr, $source:ident, $category:ident, $legacy_class:expr, $level:ident, $description:expr) => {
        MetricDef {
            key: $key,
            source: MetricSource::$source,
            category: MetricCategory::$category,
            legacy_class: $legacy_class,
            level: MetricLevel::$level,
            description: $description,
        }
    };
}

pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!("adj_arg_ovl", Cmp, ReferentialCohesion, "Coreference", Sentence, "Quantidade média de referentes que se repetem nos pares de sentenças adjacentes do texto"),
    metric_def!("arg_ovl", Cmp, ReferentialCohesion, "Coreference", Text, "Quantidade média de referentes que se repetem nos pares de sentenças do texto"),
    metric_def!("adj_stem_ovl", Cmp, ReferentialCohesion, "Coreference", Sentence, "Quantidade média de radicais de palavras de conteúdo que se repetem nos pares de sentenças adjacentes do texto"),
    metric_def!("stem_ovl", Cmp, ReferentialCohesion, "Coreference", Text, "Quantidade média de radicais de palavras de conteúdo que se repetem nos pares de sentenças do texto"),
    metric_def!("adj_cw_ovl", Cmp, ReferentialCohesion, "Coreference", Sentence, "Quantidade média de palavras de conteúdo que se repetem nos pares de sentenças adjacentes do texto"),
    metric_def!("adjacent_refs", Cmp, ReferentialCohesion, "Anaphoras", Text, "Média das proporções  de candidatos a referentes na sentença anterior em relação aos pronomes pessoais do caso reto nas sentenças"),
    metric_def!("anaphoric_refs", Cmp, ReferentialCohesion, "Anaphoras", Text, "Média das proporções  de candidatos a referentes nas 5 sentenças anteriores em relação aos pronomes anafóricos das sentenças"),
    metric_def!("if_ratio", Cmp, LogicOperators, "Logic operators", Text, "Proporção do operador lógico SE em relação à quantidade de palavras do texto"),
    metric_def!("or_ratio", Cmp, LogicOperators, "Logic operators", Text, "Proporção do operador lógico OU em relação à quantidade de palavras do texto"),
    metric_def!("and_ratio", Cmp, LogicOperators, "Logic operators", Text, "Proporção do operador lógico E em relação à quantidade de palavras do texto"),
    metric_def!("logic_operators", Cmp, LogicOperators, "Logic operators", Text, "Proporção de Operadores Lógicos em relação à quantidade de palavras do texto"),
    metric_def!("negation_ratio", Cmp, LogicOperators, "Logic operators", Text, "Proporção de palavras que denotam negação em relação à quantidade de palavras do texto"),
    metric_def!("hypernyms_verbs", Cmp, Hypernymy, "Hypernyms", Word, "Quantidade Média de Hiperônimos por verbo nas sentenças"),
    metric_def!("conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de Conectivos em relação à quantidade de palavras do texto"),
    metric_def!("add_pos_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  aditivos positivos em relação à quantidade de palavras do texto"),
    metric_def!("add_neg_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  aditivos negativos em relação à quantidade de palavras do texto"),
    metric_def!("tmp_pos_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  temporais positivosem relação à quantidade de palavras do texto"),
    metric_def!("tmp_neg_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  temporais negativos em relação à quantidade de palavras do texto"),
    metric_def!("cau_pos_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  causais positivos em relação à quantidade de palavras do texto"),
    metric_def!("cau_neg_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de conectivos  causais negativos em relação à quantidade de palavras do texto"),
    metric_def!("log_pos_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de Conectivos Lógicos Positivos em relação à quantidade de palavras do texto"),
    metric_def!("log_neg_conn_ratio", Cmp, Connectives, "Connectives", Text, "Proporção de Conectivos Lógicos Negativos em relação à quantidade de palavras do texto"),
    metric_def!("function_words", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de Palavras Funcionais em relação à quantidade de palavras do texto"),
    metric_def!("content_words", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de palavras de conteúdo em relação à quantidade de palavras do texto"),
    metric_def!("pronoun_ratio", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de pronomes em relação à quantidade de palavras do texto"),
    metric_def!("adjective_ratio", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de Adjetivos em relação à quantidade de palavras do texto"),
    metric_def!("words", Cmp, BasicCounts, "Basic Counts", Text, "Quantidade de Palavras no texto"),
    metric_def!("paragraphs", Cmp, BasicCounts, "Basic Counts", Paragraph, "Quantidade de Parágrafos no texto"),
    metric_def!("verbs", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de Verbos em relação à quantidade de palavras do texto"),
    metric_def!("adverbs", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de Advérbios em relação à quantidade de palavras do texto"),
    metric_def!("words_per_sentence", Cmp, BasicCounts, "Basic Counts", Sentence, "Média de Palavras por Sentença"),
    metric_def!("syllables_per_content_word", Cmp, BasicCounts, "Basic Counts", Text, "Quantidade média de sílabas por palavra no texto"),
    metric_def!("sentences_per_paragraph", Cmp, BasicCounts, "Basic Counts", Paragraph, "Quantidade média de sentenças por parágrafo no texto"),
    metric_def!("noun_ratio", Cmp, BasicCounts, "Basic Counts", Text, "Proporção de substantivos em relação à quantidade de palavras do texto"),
    metric_def!("sentences", Cmp, BasicCounts, "Basic Counts", Sentence, "Quantidade de Sentenças no texto"),
    metric_def!("flesch", Cmp, Readability, "Classic Formulas", Text, "Índice Flesch"),
    metric_def!("ttr", Cmp, LexicalDiversity, "Tokens", Text, "Proporção de types (despreza repetições de palavras) em relação à quantidade de tokens (computa repetições de palavras) no texto"),
    metric_def!("personal_pronouns", Cmp, LexicalDiversity, "Tokens", Text, "Proporção de Pronomes Pessoais em relação à quantidade de palavras do texto"),
    metric_def!("verbs_ambiguity", Cmp, Ambiguity, "Ambiguity", Word, "Proporção de sentidos dos verbos do texto em relação à quantidade de verbos do texto"),
    metric_def!("adjectives_ambiguity", Cmp, Ambiguity, "Ambiguity", Word, "Proporção de sentidos dos adjetivos do texto em relação à quantidade de adjetivos do texto"),
    metric_def!("nouns_ambiguity", Cmp, Ambiguity, "Ambiguity", Word, "Proporção de sentidos dos substantivos do texto em relação à  quantidade de substantivos do texto"),
    metric_def!("adverbs_ambiguity", Cmp, Ambiguity, "Ambiguity", Word, "Proporção de sentidos dos advérbios do texto em relação à  quantidade de advérbios do texto"),
    metric_def!("mean_noun_phrase", Cmp, SyntacticComplexity, "Constituents", Sentence, "Média dos tamanhos médios dos sintagmas nominais nas sentenças"),
    metric_def!("words_before_main_verb", Cmp, SyntacticComplexity, "Constituents", Sentence, "Quantidade Média de palavras antes dos verbos principais das orações principais das sentenças"),
    metric_def!("min_cw_freq", Cmp, WordFrequency, "Word frequencies", Word, "Média das frequências das palavras de conteúdo mais raras das sentenças do texto"),
    metric_def!("cw_freq", Cmp, WordFrequency, "Word frequencies", Word, "Média das frequências absolutas das palavras de conteúdo do texto"),
    metric_def!("brunet", Cmd, Readability, "Classic Formulas", Text, "Índice de Brunet"),
    metric_def!("honore", Cmd, Readability, "Classic Formulas", Text, "Estatística de Horoné"),
    metric_def!("yngve", Cmd, SyntacticComplexity, "z", Sentence, "Fórmula de Complexidade Sintática de Yngve"),
    metric_def!("frazier", Cmd, SyntacticComplexity, "z", Sentence, "Fórmula de Complexidade Sintática de Frazier"),
    metric_def!("dep_distance", Cmd, SyntacticComplexity, "z", Sentence, "Distância na árvore de dependências"),
    metric_def!("content_density", Gtn, Morphosyntax, "z", Text, "Proporção de palavras de conteúdo em relação à quantidade de palavras funcionais do texto"),
    metric_def!("ratio_function_to_content_words", Gtn, Morphosyntax, "z", Text, "Proporção de palavras funcionais em relação à quantidade de palavras de conteúdo do texto"),
    metric_def!("apposition_per_clause", Aic, SyntacticComplexity, "z", Text, "Quantidade média de apostos por oração do texto"),
    metric_def!("clauses_per_sentence", Aic, SyntacticComplexity, "z", Sentence, "Quantidade média de orações por sentença"),
    metric_def!("prepositions_per_clause", Aic, Morphosyntax, "z", Text, "Proporção de preposições em relação à quantidade de orações no texto"),
    metric_def!("adjunct_per_clause", Aic, SyntacticComplexity, "z", Text, "Quantidade média de adjuntos adverbiais por oração do texto"),
    metric_def!("prepositions_per_sentence", Aic, Morphosyntax, "z", Sentence, "Quantidade Média de preposições por sentença no texto"),
    metric_def!("relative_clauses", Aic, SyntacticComplexity, "z", Text, "Proporção de orações relativas em relação à quantidade de orações do texto"),
    metric_def!("aux_plus_PCP_per_sentence", Aic, SyntacticComplexity, "z", Sentence, "Proporção de verbos auxiliares seguidos de particípio em relação à quantidade de sentenças do texto"),
    metric_def!("coordinate_conjunctions_per_clauses", Aic, SyntacticComplexity, "z", Text, "Proporção de conjunções coordenativas em relação a todas as orações do texto"),
    metric_def!("ratio_coordinate_conjunctions", Aic, Morphosyntax, "z", Text, "Proporção de conjunções coordenativas em relação a todas as conjunções do texto"),
    metric_def!("first_person_possessive_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes possessivos nas primeiras pessoas em relação à quantidade de pronomes possessivos do texto"),
    metric_def!("first_person_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes pessoais nas primeiras pessoas em relação à quantidade de pronomes pessoais do texto"),
    metric_def!("gerund_verbs", Aic, Morphosyntax, "z", Text, "Proporção de verbos no gerúndio em relação a todos os verbos do texto"),
    metric_def!("infinitive_verbs", Aic, Morphosyntax, "z", Text, "Proporção de verbos no infinitivo em relação a todos os verbos do texto"),
    metric_def!("inflected_verbs", Aic, Morphosyntax, "z", Text, "Proporção de verbos flexionados em relação a todos os verbos do texto"),
    metric_def!("non-inflected_verbs", Aic, Morphosyntax, "z", Text, "Proporção de verbos no gerúndio/particípio/infinitivo em relação a todos os verbos do texto"),
    metric_def!("participle_verbs", Aic, Morphosyntax, "z", Text, "Proporção de verbos no particípio em relação a todos os verbos do texto"),
    metric_def!("passive_ratio", Aic, SyntacticComplexity, "z", Text, "Proporção de orações na voz passiva analítica em relação à quantidade de orações do texto"),
    metric_def!("second_person_possessive_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes possessivos nas segundas pessoas em relação à quantidade de pronomes possessivos do texto"),
    metric_def!("second_person_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes pessoais nas segundas pessoas em relação à quantidade de pronomes pessoais do texto"),
    metric_def!("sentences_with_five_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 5 orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_four_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 4 orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_one_clause", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 1 oração em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_seven_more_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 7 ou mais orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_six_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 6 orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_three_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 3 orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_two_clauses", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças com 2 orações em relação a todas as sentenças do texto"),
    metric_def!("sentences_with_zero_clause", Aic, SyntacticComplexity, "z", Sentence, "Proporção de sentenças sem verbos em relação a todas as sentenças do texto"),
    metric_def!("simple_word_ratio", Aic, WordFrequency, "z", Word, "Proporção de palavras de conteúdo simples em relação a todas palavras de conteúdo do texto"),
    metric_def!("ratio_subordinate_conjunctions", Aic, Morphosyntax, "z", Text, "Proporção de conjunções subordinativas em relação a todas conjunções do texto"),
    metric_def!("third_person_possessive_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes possessivos nas terceiras pessoas em relação à quantidade de pronomes possessivos do texto"),
    metric_def!("third_person_pronouns", Aic, Morphosyntax, "z", Text, "Proporção de pronomes pessoais nas terceiras pessoas em relação à quantidade de pronomes pessoais do texto"),
    metric_def!("adjective_diversity_ratio", Gtn, LexicalDiversity, "z", Text, "Proporção de types de adjetivos  em relação à quantidade de tokens de adjetivos no texto"),
    metric_def!("adjectives_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de adjetivos em relação à quantidade de palavras das sentenças"),
    metric_def!("adjectives_min", Gtn, Morphosyntax, "z", Sentence, "Proporção mínima de adjetivos em relação à quantidade de palavras das sentenças"),
    metric_def!("adjectives_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre adjetivos e a quantidade de palavras das sentenças"),
    metric_def!("adverbs_diversity_ratio", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de advérbios em relação à quantidade de tokens de  advérbios no texto"),
    metric_def!("adverbs_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de advérbios em relação à quantidade de palavras das sentenças"),
    metric_def!("adverbs_min", Gtn, Morphosyntax, "z", Sentence, "Proporção mínima de advérbios em relação à quantidade de palavras das sentenças"),
    metric_def!("adverbs_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre advérbios e a quantidade de palavras das sentenças"),
    metric_def!("concretude_mean", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Média dos valores de concretude das palavras de conteúdo do texto"),
    metric_def!("concretude_std", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Desvio padrão do valor de concretude das palavras de conteúdo do texto"),
    metric_def!("concretude_1_25_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de concretude entre 1 e 2.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("concretude_25_4_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de concretude entre 2.5  e 4 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("concretude_4_55_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de concretude entre 4 e 5.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("concretude_55_7_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de concretude entre 5.5 e 7  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("content_word_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção de types de palavras de conteúdo em relação à quantidade de tokens de palavras de conteúdo no texto"),
    metric_def!("content_word_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de palavras de conteúdo em relação à quantidade de palavras das sentenças"),
    metric_def!("content_word_min", Gtn, Morphosyntax, "z", Sentence, "Proporção Mínima de palavras de conteúdo por quantidade de palavras nas sentenças"),
    metric_def!("content_word_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre as palavras de conteúdo e a quantidade de palavras das sentenças"),
    metric_def!("content_words_ambiguity", Gtn, Ambiguity, "z", Word, "Média de sentidos por palavra de conteúdo do texto"),
    metric_def!("dalechall_adapted", Gtn, Readability, "Classic Formulas", Text, "Fórmula Dale Chall adaptada"),
    metric_def!("verbal_time_moods_diversity", Gtn, LexicalDiversity, "z", Text, "Quantidade de diferentes tempos-modos verbais que ocorrem no texto"),
    metric_def!("easy_conjunctions_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de conjunções fáceis em relação à quantidade de palavras do texto"),
    metric_def!("familiaridade_mean", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Média dos valores de familiaridade das palavras de conteúdo do texto"),
    metric_def!("familiaridade_std", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Desvio padrão dos valores de familiaridade das palavras de conteúdo do texto"),
    metric_def!("familiaridade_1_25_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de familiaridade entre 1 e 2.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("familiaridade_25_4_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de familiaridade entre 2.5  e 4 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("familiaridade_4_55_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de familiaridade entre 4 e 5.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("familiaridade_55_7_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de familiaridade entre 5.5 e 7  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("function_word_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de palavras funcionais em relação à quantidade de tokens de palavras funcionais no texto"),
    metric_def!("gunning_fox", Gtn, Readability, "Classic Formulas", Text, "Índice Gunning Fog"),
    metric_def!("hard_conjunctions_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de conjunções difíceis em relação à quantidade de palavras do texto"),
    metric_def!("idade_aquisicao_mean", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Média dos valores de idade de aquisição das palavras de conteúdo do texto"),
    metric_def!("idade_aquisicao_std", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Desvio padrão dos valores de idade de aquisição das palavras de conteúdo do texto"),
    metric_def!("idade_aquisicao_1_25_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de idade de aquisição entre 1 e 2.5 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("idade_aquisicao_4_55_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de idade de aquisição entre 4 e 5.5 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("idade_aquisicao_55_7_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de idade de aquisição entre 5.5 e 7 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("idade_aquisicao_25_4_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de idade de aquisição entre 2.5  e 4 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("imageabilidade_mean", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Média dos valores de imageabilidade das palavras de conteúdo do texto"),
    metric_def!("imageabilidade_std", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Desvio padrão dos valores de imageabilidade das palavras de conteúdo do texto"),
    metric_def!("imageabilidade_1_25_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de imageabilidade entre 1 e 2.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("imageabilidade_25_4_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de imageabilidade entre 2.5  e 4 em relação a todas as palavras de conteúdo do texto"),
    metric_def!("imageabilidade_4_55_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de imageabilidade entre 4 e 5.5  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("imageabilidade_55_7_ratio", Gtn, Psycholinguistics, "Psycholinguistics", Word, "Proporção de palavras com valor de imageabilidade entre 5.5 e 7  em relação a todas as palavras de conteúdo do texto"),
    metric_def!("indefinite_pronouns_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de pronomes indefinidos em relação à quantidade de tokens de  pronomes indefinidos no texto"),
    metric_def!("medium_long_sentence_ratio", Gtn, BasicCounts, "z", Sentence, "Proporção de Sentenças Longas em relação a todas as sentenças do texto"),
    metric_def!("max_noun_phrase", Gtn, SyntacticComplexity, "z", Text, "Máximo entre os tamanhos de sintagmas nominais do texto"),
    metric_def!("medium_short_sentence_ratio", Gtn, BasicCounts, "z", Sentence, "Proporção de Sentenças Médias em relação a todas as sentenças do texto"),
    metric_def!("min_noun_phrase", Gtn, SyntacticComplexity, "z", Text, "Mínimo entre os tamanhos de sintagmas nominais do texto"),
    metric_def!("named_entity_ratio_sentence", Gtn, Morphosyntax, "z", Sentence, "Média das proporções de Nomes Próprios em relação à quantidade de palavras das Sentenças"),
    metric_def!("named_entity_ratio_text", Gtn, Morphosyntax, "z", Text, "Proporção de Nomes Próprios em relação à quantidade de palavras do Texto"),
    metric_def!("noun_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção de types de substantivos em relação à quantidade de tokens de  substantivos no texto"),
    metric_def!("nouns_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de substantivos em relação à quantidade de palavras das sentenças"),
    metric_def!("nouns_min", Gtn, Morphosyntax, "z", Sentence, "Proporção mínima de substantivos em relação à quantidade de palavras das sentenças"),
    metric_def!("nouns_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre substantivos e a quantidade de palavras das sentenças"),
    metric_def!("subtitles", Gtn, BasicCounts, "z", Text, "Proporção de Subtítulos em relação à quantidade de sentenças do texto"),
    metric_def!("postponed_subject_ratio", Gtn, SyntacticComplexity, "z", Text, "Proporção de sujeitos pospostos em relação a todos os sujeitos do texto"),
    metric_def!("preposition_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de preposições em relação à quantidade de tokens de preposições no texto"),
    metric_def!("pronoun_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção de types de pronomes em relação à quantidade de tokens de  pronomes no texto"),
    metric_def!("pronouns_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de pronomes em relação à quantidade de palavras das sentenças"),
    metric_def!("pronouns_min", Gtn, Morphosyntax, "z", Sentence, "Proporção mínima de pronomes em relação à quantidade de palavras das sentenças"),
    metric_def!("pronouns_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre pronomes e a quantidade de palavras das sentenças"),
    metric_def!("dialog_pronoun_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de pronomes pessoais que indicam uma conversa com o leitor em relação à quantidade de pronomes pessoais do texto"),
    metric_def!("punctuation_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de pontuações em relação à quantidade de tokens de pontuações no texto"),
    metric_def!("punctuation_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de sinais de pontuação em relação à quantidade de palavras do texto"),
    metric_def!("abstract_nouns_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de substantivos abstratos em relação à quantidade de palavras do texto"),
    metric_def!("adverbs_before_main_verb_ratio", Gtn, SyntacticComplexity, "z", Text, "Proporção de orações com advérbio antes do verbo principal em relação à quantidade de orações do texto"),
    metric_def!("subjunctive_future_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Futuro do Subjuntivo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("indefinite_pronoun_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de pronomes indefinidos em relação a todos os pronomes do texto"),
    metric_def!("indicative_condition_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Futuro do Pretérito do Indicativo em relação à quantidade de verbos flexionados do texto"),
    metric_def!("indicative_future_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Futuro do Presente do Indicativo em relação à quantidade de verbos flexionados do texto"),
    metric_def!("indicative_imperfect_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Pretérito Imperfeito do Indicativo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("indicative_pluperfect_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Pretérito Mais que Perfeito do Indicativo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("indicative_present_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Presente do Indicativo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("indicative_preterite_perfect_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Pretérito Perfeito Simples do Indicativo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("infinite_subordinate_clauses", Gtn, SyntacticComplexity, "z", Text, "Proporção de orações subordinadas reduzidas pela quantidade de orações do texto"),
    metric_def!("oblique_pronouns_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de pronomes oblíquos em relação a todos os pronomes do texto"),
    metric_def!("relative_pronouns_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Pronomes Relativos em relação à quantidade de pronomes do texto"),
    metric_def!("subjunctive_imperfect_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Pretérito Imperfeito do Subjuntivo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("subjunctive_present_ratio", Gtn, Morphosyntax, "z", Text, "Proporção de Verbos no Presente do Subjuntivo em relação à quantidade de verbos flexionados no texto"),
    metric_def!("subordinate_clauses", Aic, SyntacticComplexity, "z", Text, "Proporção de orações subordinadas pela quantidade de orações do texto"),
    metric_def!("temporal_adjunct_ratio", Gtn, SyntacticComplexity, "z", Text, "Proporção de adjuntos adverbiais de tempo em relação a todos os adjuntos adverbiais do texto"),
    metric_def!("demonstrative_pronoun_ratio", Gtn, ReferentialCohesion, "z", Text, "Média de candidatos a referente (na sentença anterior) por pronome demonstrativo anafórico"),
    metric_def!("coreference_pronoum_ratio", Gtn, ReferentialCohesion, "z", Text, "Média de candidatos a referente (na sentença anterior) por pronome anafórico do caso reto"),
    metric_def!("non_svo_ratio", Gtn, SyntacticComplexity, "z", Text, "Proporção de orações que não estão no formato SVO (sujeito-verbo-objeto) em relação a todas orações do texto"),
    metric_def!("relative_pronouns_diversity_ratio", Gtn, LexicalDiversity, "z", Text, "Proporção  de types de  pronomes relativos  em relação à quantidade de tokens de  pronomes relativos no texto"),
    metric_def!("sentence_length_max", Gtn, BasicCounts, "z", Sentence, "Quantidade Máxima de palavras por sentença"),
    metric_def!("sentence_length_min", Gtn, BasicCounts, "z", Sentence, "Quantidade Mínima de palavras por sentença"),
    metric_def!("sentence_length_standard_deviation", Gtn, BasicCounts, "z", Sentence, "Desvio Padrão da quantidade de palavras por sentença"),
    metric_def!("short_sentence_ratio", Gtn, BasicCounts, "z", Sentence, "Proporção de Sentenças Curtas em relação a todas as sentenças do texto"),
    metric_def!("std_noun_phrase", Gtn, SyntacticComplexity, "z", Text, "Desvio-padrão do tamanho dos sintagmas nominais do texto"),
    metric_def!("verb_diversity", Gtn, LexicalDiversity, "z", Text, "Proporção de types de verbos em relação à quantidade de tokens de verbos no texto"),
    metric_def!("verbs_max", Gtn, Morphosyntax, "z", Sentence, "Proporção máxima de advérbios em relação à quantidade de palavras das sentenças"),
    metric_def!("verbs_min", Gtn, Morphosyntax, "z", Sentence, "Proporção mínima de verbos em relação à quantidade de palavras das sentenças"),
    metric_def!("negative_words", Liw, Sentiment, "z", Text, "Proporção de palavras de polaridade negativa em relação a todas palavras do texto"),
    metric_def!("positive_words", Liw, Sentiment, "z", Text, "Proporção de palavras de polaridade positiva em relação a todas palavras do texto"),
    metric_def!("verbs_standard_deviation", Gtn, Morphosyntax, "z", Sentence, "Desvio padrão das proporções entre advérbios e a quantidade de palavras das sentenças"),
    metric_def!("long_sentence_ratio", Gtn, BasicCounts, "z", Sentence, "Proporção de Sentenças Longas em relação a todas as sentenças do texto"),
    metric_def!("cw_freq_brwac", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras de conteúdo do texto na escala logarítmica Zipf via BrWac"),
    metric_def!("min_cw_freq_brwac", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras de conteúdo do texto na escala logarítmica Zipf via BrWac"),
    metric_def!("freq_brwac", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras do texto na escala logarítmica Zipf via BrWac"),
    metric_def!("min_freq_brwac", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras mais raras das sentenças do texto na escala logarítmica Zipf via BrWac"),
    metric_def!("cw_freq_bra", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras de conteúdo do texto na escala logarítmica Zipf via Corpus Brasileiro"),
    metric_def!("min_cw_freq_bra", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras de conteúdo mais raras das sentenças do texto na escala logarítmica Zipf via Corpus Brasileiro"),
    metric_def!("freq_bra", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras do texto na escala logarítmica Zipf via Corpus Brasileiro"),
    metric_def!("min_freq_bra", Rts, WordFrequency, "Word frequencies", Word, "Média dos valores das frequências das palavras mais raras das sentenças do texto na escala logarítmica Zipf via Corpus Brasileiro"),
    metric_def!("lsa_adj_mean", Cmd, LatentSemantics, "LSA", Sentence, "Média de similaridade entre pares de sentenças adjacentes no texto"),
    metric_def!("lsa_adj_std", Cmd, LatentSemantics, "LSA", Sentence, "Desvio padrão de similaridade entre pares de sentenças adjacentes no texto"),
    metric_def!("lsa_all_mean", Cmd, LatentSemantics, "LSA", Sentence, "Média de similaridade entre todos os pares de sentenças no texto"),
    metric_def!("lsa_all_std", Cmd, LatentSemantics, "LSA", Sentence, "Desvio padrão de similaridade entre todos os pares possíveis de sentenças do texto"),
    metric_def!("lsa_givenness_mean", Cmd, LatentSemantics, "LSA", Sentence, "Média do *givenness* da cada sentença do texto a partir da segunda"),
    metric_def!("lsa_givenness_std", Cmd, LatentSemantics, "LSA", Sentence, "Desvio padrão do *givenness* da cada sentença do texto a partir da segunda"),
    metric_def!("lsa_paragraph_mean", Cmd, LatentSemantics, "LSA", Paragraph, "Média de similaridade entre pares de parágrafos adjacentes no texto"),
    metric_def!("lsa_paragraph_std", Cmd, LatentSemantics, "LSA", Paragraph, "Desvio padrão entre parágrafos adjacentes no texto"),
    metric_def!("lsa_span_mean", Cmd, LatentSemantics, "LSA", Sentence, "Média do *span* da cada sentença do texto a partir da segunda"),
    metric_def!("lsa_span_std", Cmd, LatentSemantics, "LSA", Sentence, "Desvio padrão do span da cada sentença do texto a partir da segunda"),
    metric_def!("cross_entropy", Cmd, LanguageModel, "Language Model", Sentence, "Média da entropia cruzadas das sentenças do texto"),];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_all_metrics() {
        assert_eq!(METRIC_DEFINITIONS.len(), 200);
    }

    #[test]
    fn test_all_metric_keys_are_unique() {
        let mut keys = HashSet::new();
        for metric_def in METRIC_DEFINITIONS {
            assert!(keys.insert(metric_def.key), "Duplicate metric key found: '{}'", metric_def.key);
        }
    }

    #[test]
    fn test_all_metrics_have_descriptions() {
        for metric_def in METRIC_DEFINITIONS {
            assert!(
                !metric_def.description.is_empty(),
                "Metric '{}' has an empty description",
                metric_def.key
            );
        }
    }

    #[test]
    fn test_keys_have_no_surrounding_whitespace() {
        for metric_def in METRIC_DEFINITIONS {
            assert_eq!(metric_def.key, metric_def.key.trim(), "Metric key '{}' is padded", metric_def.key);
        }
    }

    #[test]
    fn test_legacy_classes_are_never_empty() {
        for metric_def in METRIC_DEFINITIONS {
            assert!(!metric_def.legacy_class.is_empty(), "Metric '{}' has no legacy class", metric_def.key);
        }
    }

    #[test]
    fn test_every_source_defines_metrics() {
        let sources: HashSet<_> = METRIC_DEFINITIONS.iter().map(|d| d.source).collect();
        assert_eq!(sources.len(), 6);
    }

    #[test]
    fn test_unclassified_legacy_metrics_get_a_current_category() {
        let unclassified = METRIC_DEFINITIONS
            .iter()
            .filter(|d| d.legacy_class == "z")
            .count();
        assert_eq!(unclassified, 107);
    }
}
