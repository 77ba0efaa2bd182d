/*!
# `IF <expression> <relation> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The relation is one of `<`, `=` or `>`. When the comparison is false
execution continues with the next line.
Only allowed in a program line.

## Example
```text
10 LET N = 3
20 PRINT N
30 LET N = N - 1
40 IF N > 0 THEN 20
RUN
3
2
1
```

*/
