/*!
# Expressions and Variables

There is one type of data: the signed 32-bit integer. Every literal,
variable and result is an integer from -2147483648 to 2147483647.

Variable names start with an ASCII letter followed by any number of
letters, digits and underbars. Names are case sensitive, so `COUNT`
and `count` are two different variables. Reserved words such as
`PRINT` can't be used as names. A variable must be assigned with `LET`
before it is read or you get a `VARIABLE NOT DEFINED` error.

```text
LET COUNT = 10
LET count_2 = COUNT * 2
```

Literals are decimal digits with no decimal point or exponent.
A minus sign directly before a literal makes it negative, so
`-2147483648` is allowed. A literal too large for an integer is a
`SYNTAX ERROR`.

Expressions combine literals and variables with these operators,
listed in order of precedence.

| Precedence | Operators | Meaning |
|-|-|-|
| 3 | - | Unary negation |
| 2 | * / | Multiplication and division |
| 1 | + - | Addition and subtraction |

Operators of equal precedence are evaluated left to right and
parentheses override precedence. Division truncates toward zero.
Parentheses and negations may nest 64 deep; deeper nesting is a
`SYNTAX ERROR`. A line longer than 1024 characters is a
`LINE BUFFER OVERFLOW` and is ignored.

```text
PRINT 2 + 3 * 4   ' 14
PRINT (2 + 3) * 4 ' 20
PRINT 8 - 2 - 3   ' 3
PRINT -7 / 2      ' -3
```

All arithmetic is checked. Dividing by zero is a `DIVIDE BY ZERO` error
and a result outside the integer range is an `OVERFLOW` error.
The statement with the failed expression has no effect.

```text
PRINT 1 / 0           ' DIVIDE BY ZERO
PRINT 2147483647 + 1  ' OVERFLOW
```

Relations compare two expressions and appear only in `IF`.
The three relations are `<`, `=` and `>`.

```text
10 IF A * 2 > B THEN 100
```

Errors are reported on a line of their own. A program stops at the
first error and variables keep whatever values they had.

| Message | Cause |
|-|-|
| `SYNTAX ERROR` | A line that doesn't parse |
| `LINE NUMBER ERROR` | Jumping to a line that doesn't exist or using line 0 |
| `VARIABLE NOT DEFINED` | Reading a variable before `LET` or `INPUT` |
| `DIVIDE BY ZERO` | Division with a zero divisor |
| `OVERFLOW` | A result outside the integer range |
| `EXECUTION LIMIT EXCEEDED` | A line ran more than `--line-limit` times |
| `BREAK` | CTRL-C stopped the program |
| `LINE BUFFER OVERFLOW` | A line longer than 1024 characters |

*/
